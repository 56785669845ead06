// File: ./src/logging.rs
// The terminal belongs to the UI, so tracing output goes to a file.
use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub fn log_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("FURROW_LOG_DIR") {
        return Some(PathBuf::from(dir).join("furrow.log"));
    }
    ProjectDirs::from("com", "furrow", "furrow").map(|proj| proj.data_dir().join("furrow.log"))
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over `verbose`.
/// Returns the log file path, or `None` when no data dir is available.
pub fn init(verbose: u8) -> Result<Option<PathBuf>> {
    init_at(log_path(), verbose)
}

/// Like [`init`], but a failure only prints a warning to stderr; the
/// calendar runs fine without a log file. Call before raw mode.
pub fn init_or_warn(verbose: u8) -> Option<PathBuf> {
    warn_on_failure(init(verbose))
}

fn warn_on_failure(result: Result<Option<PathBuf>>) -> Option<PathBuf> {
    match result {
        Ok(path) => path,
        Err(err) => {
            eprintln!("warning: {err:#}; continuing without a log file");
            None
        }
    }
}

pub fn init_at(path: Option<PathBuf>, verbose: u8) -> Result<Option<PathBuf>> {
    let Some(path) = path else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log dir {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level(verbose)))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();

    if let Err(err) = init_result {
        tracing::debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritable_log_dir_is_not_fatal() {
        // A regular file where the log directory should be
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let path = blocker.path().join("logs").join("furrow.log");

        let result = init_at(Some(path), 0);
        assert!(result.is_err());
        assert_eq!(warn_on_failure(result), None);
    }

    #[test]
    fn missing_data_dir_skips_logging() {
        assert_eq!(init_at(None, 0).unwrap(), None);
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(2), "debug");
        assert_eq!(default_level(9), "trace");
    }
}
