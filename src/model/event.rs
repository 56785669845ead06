// File: ./src/model/event.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single field task pinned to a calendar day.
///
/// `date` is kept as the ISO `YYYY-MM-DD` string the form produced; it is
/// never re-validated after insertion. `kind` is always lowercased.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub date: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl CalendarEvent {
    pub fn new(date: &str, title: &str, kind: &str) -> Self {
        Self {
            date: date.to_string(),
            title: title.to_string(),
            kind: kind.to_lowercase(),
        }
    }
}

/// The six task categories offered by the add form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskType {
    #[default]
    Planting,
    Harvesting,
    Fertilizing,
    PestControl,
    Maintenance,
    Other,
}

impl TaskType {
    pub const ALL: [TaskType; 6] = [
        TaskType::Planting,
        TaskType::Harvesting,
        TaskType::Fertilizing,
        TaskType::PestControl,
        TaskType::Maintenance,
        TaskType::Other,
    ];

    /// Display-cased label, as shown in the type selector.
    pub fn label(self) -> &'static str {
        match self {
            TaskType::Planting => "Planting",
            TaskType::Harvesting => "Harvesting",
            TaskType::Fertilizing => "Fertilizing",
            TaskType::PestControl => "Pest Control",
            TaskType::Maintenance => "Maintenance",
            TaskType::Other => "Other",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaskType {
    type Err = String;

    // Case-insensitive; "pest control" and "Pest Control" are the same type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.label().to_lowercase() == lower)
            .ok_or_else(|| format!("unknown task type: {}", s))
    }
}

/// The four entries every fresh calendar starts with.
pub fn seed_events() -> Vec<CalendarEvent> {
    vec![
        CalendarEvent::new("2025-04-15", "Start Corn Planting", "planting"),
        CalendarEvent::new("2025-04-20", "Apply Fertilizer - North Field", "fertilizing"),
        CalendarEvent::new("2025-05-01", "Irrigation System Maintenance", "maintenance"),
        CalendarEvent::new("2025-05-10", "Complete Corn Planting", "planting"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("PEST CONTROL".parse::<TaskType>(), Ok(TaskType::PestControl));
        assert_eq!("harvesting".parse::<TaskType>(), Ok(TaskType::Harvesting));
        assert!("weeding".parse::<TaskType>().is_err());
    }

    #[test]
    fn cycling_wraps_in_form_order() {
        assert_eq!(TaskType::Other.next(), TaskType::Planting);
        assert_eq!(TaskType::Planting.previous(), TaskType::Other);
        assert_eq!(TaskType::Fertilizing.next(), TaskType::PestControl);
    }

    #[test]
    fn event_kind_is_lowercased() {
        let ev = CalendarEvent::new("2025-06-01", "Scout Fields", "Pest Control");
        assert_eq!(ev.kind, "pest control");
    }

    #[test]
    fn seed_keeps_insertion_order() {
        let seed = seed_events();
        assert_eq!(seed.len(), 4);
        assert_eq!(seed[0].title, "Start Corn Planting");
        assert_eq!(seed[3].date, "2025-05-10");
    }
}
