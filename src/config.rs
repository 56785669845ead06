// File: ./src/config.rs
use crate::model::{CalendarEvent, seed_events};
use crate::status::DEFAULT_TIMEOUT;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User settings, read from `config.toml`. Every field is optional.
///
/// ```toml
/// status_timeout_secs = 3
/// tick_rate_ms = 50
/// start_date = "2025-04-15"
///
/// [[events]]
/// date = "2025-06-01"
/// title = "Scout Fields"
/// type = "Pest Control"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub status_timeout_secs: u64,
    pub tick_rate_ms: u64,
    pub start_date: Option<NaiveDate>,
    pub events: Option<Vec<CalendarEvent>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            status_timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            tick_rate_ms: 50,
            start_date: None,
            events: None,
        }
    }
}

impl Config {
    pub fn get_path() -> Option<PathBuf> {
        // Explicit override first (used by tests and packaging)
        if let Ok(path) = env::var("FURROW_CONFIG") {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("com", "furrow", "furrow").map(|proj| proj.config_dir().join("config.toml"))
    }

    /// Loads from the default location. A missing file yields defaults.
    pub fn load() -> Result<Self> {
        match Self::get_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config at {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn status_timeout(&self) -> Duration {
        Duration::from_secs(self.status_timeout_secs)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    /// The day the calendar opens on.
    pub fn today(&self) -> NaiveDate {
        self.start_date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Seed list: the configured events (types lowercased) or the built-in four.
    pub fn seed(&self) -> Vec<CalendarEvent> {
        match &self.events {
            Some(events) => events
                .iter()
                .map(|e| CalendarEvent::new(&e.date, &e.title, &e.kind))
                .collect(),
            None => seed_events(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.status_timeout(), Duration::from_secs(3));
        assert_eq!(cfg.seed().len(), 4);
    }

    #[test]
    fn loads_overrides_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
status_timeout_secs = 5
start_date = "2025-05-10"

[[events]]
date = "2025-05-10"
title = "Scout Fields"
type = "Pest Control"
"#
        )
        .unwrap();

        let cfg = Config::load_from(file.path()).unwrap();
        assert_eq!(cfg.status_timeout(), Duration::from_secs(5));
        assert_eq!(cfg.today(), NaiveDate::from_ymd_opt(2025, 5, 10).unwrap());
        assert_eq!(
            cfg.seed(),
            vec![CalendarEvent::new("2025-05-10", "Scout Fields", "pest control")]
        );
    }

    #[test]
    fn malformed_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "status_timeout_secs = \"soon\"").unwrap();
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to parse config"));
    }
}
