// File: ./src/model/draft.rs
use crate::model::event::TaskType;

/// The in-progress contents of the add-task form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub date: String,
    pub kind: TaskType,
    // Collected by the form, dropped on submit.
    pub notes: String,
}

impl TaskDraft {
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.date.is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_draft_is_empty_planting() {
        let d = TaskDraft::default();
        assert_eq!(d.title, "");
        assert_eq!(d.date, "");
        assert_eq!(d.kind.label(), "Planting");
        assert_eq!(d.notes, "");
        assert!(!d.is_complete());
    }

    #[test]
    fn whitespace_counts_as_present() {
        let d = TaskDraft {
            title: " ".to_string(),
            date: "2025-05-10".to_string(),
            ..TaskDraft::default()
        };
        assert!(d.is_complete());
    }
}
