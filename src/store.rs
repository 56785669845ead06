// File: ./src/store.rs
//! Explicit state for the calendar screen.
//!
//! `CalendarStore` owns the selected day, the event list, the add-form
//! draft and the status line. Nothing here touches the terminal; the TUI
//! reads and mutates it, and tests drive it directly.
use crate::filter;
use crate::model::{CalendarEvent, TaskDraft, seed_events};
use crate::status::{StatusLine, StatusTimer};
use chrono::{Duration, Months, NaiveDate};
use thiserror::Error;
use tracing::{debug, info};

pub const ADDED_MESSAGE: &str = "Task added to calendar!";

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AddTaskError {
    #[error("Please enter a title and date.")]
    MissingFields,
}

#[derive(Debug)]
pub struct CalendarStore {
    pub events: Vec<CalendarEvent>,
    pub selected: Option<NaiveDate>,
    pub draft: TaskDraft,
    pub status: StatusLine,
}

impl CalendarStore {
    pub fn new(events: Vec<CalendarEvent>, selected: Option<NaiveDate>) -> Self {
        Self {
            events,
            selected,
            draft: TaskDraft::default(),
            status: StatusLine::default(),
        }
    }

    /// The built-in seed list with `today` selected.
    pub fn seeded(today: NaiveDate) -> Self {
        Self::new(seed_events(), Some(today))
    }

    pub fn with_timer(mut self, timer: StatusTimer) -> Self {
        self.status = StatusLine::with_timer(timer);
        self
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        debug!(date = %date, "date selected");
        self.selected = Some(date);
    }

    pub fn clear_selection(&mut self) {
        debug!("date selection cleared");
        self.selected = None;
    }

    /// Moves the selection by `days`, starting from `fallback` when nothing
    /// is selected.
    pub fn shift_selection(&mut self, days: i64, fallback: NaiveDate) {
        let base = self.selected.unwrap_or(fallback);
        if let Some(date) = base.checked_add_signed(Duration::days(days)) {
            self.select_date(date);
        }
    }

    pub fn shift_month(&mut self, forward: bool, fallback: NaiveDate) {
        let base = self.selected.unwrap_or(fallback);
        let moved = if forward {
            base.checked_add_months(Months::new(1))
        } else {
            base.checked_sub_months(Months::new(1))
        };
        if let Some(date) = moved {
            self.select_date(date);
        }
    }

    pub fn selected_key(&self) -> Option<String> {
        self.selected.map(filter::date_key)
    }

    pub fn draft_mut(&mut self) -> &mut TaskDraft {
        &mut self.draft
    }

    pub fn message(&self) -> Option<&str> {
        self.status.text()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status.set(message);
    }

    pub fn clear_status(&mut self) {
        self.status.clear();
    }

    /// Events for the task pane. See [`filter::visible_events`].
    pub fn visible(&self, today: NaiveDate) -> Vec<&CalendarEvent> {
        filter::visible_events(&self.events, self.selected, today)
    }

    /// Days in the given month that carry at least one event.
    pub fn busy_days(&self, year: i32, month: u32) -> Vec<u32> {
        let prefix = format!("{:04}-{:02}-", year, month);
        let mut days: Vec<u32> = self
            .events
            .iter()
            .filter_map(|e| e.date.strip_prefix(&prefix))
            .filter_map(|d| d.parse::<u32>().ok())
            .collect();
        days.sort_unstable();
        days.dedup();
        days
    }

    /// Validates the draft and appends it as a new event.
    ///
    /// On failure the event list and the draft are left untouched.
    pub fn add_task(&mut self) -> Result<(), AddTaskError> {
        if !self.draft.is_complete() {
            let err = AddTaskError::MissingFields;
            debug!(
                has_title = !self.draft.title.is_empty(),
                has_date = !self.draft.date.is_empty(),
                "rejected incomplete draft"
            );
            self.status.set(err.to_string());
            return Err(err);
        }

        let event = CalendarEvent::new(&self.draft.date, &self.draft.title, self.draft.kind.label());
        info!(date = %event.date, title = %event.title, kind = %event.kind, "task added");
        self.events.push(event);
        self.draft.reset();
        self.status.set(ADDED_MESSAGE);
        Ok(())
    }
}
