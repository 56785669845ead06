// File: ./src/filter.rs
//! Derives the task list shown for the current selection.
//!
//! Dates are compared as ISO `YYYY-MM-DD` strings. A selected day is turned
//! into that string from its calendar-local year/month/day fields only, so
//! no UTC shift can move it to the neighbouring day.
use crate::model::CalendarEvent;
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Events whose date string equals `key`, in insertion order.
pub fn events_on<'a>(events: &'a [CalendarEvent], key: &str) -> Vec<&'a CalendarEvent> {
    events.iter().filter(|e| e.date == key).collect()
}

/// Events dated on or after `today`, earliest first.
///
/// Ties keep insertion order. Dates that do not parse are skipped.
pub fn upcoming(events: &[CalendarEvent], today: NaiveDate) -> Vec<&CalendarEvent> {
    let mut dated: Vec<(NaiveDate, &CalendarEvent)> = events
        .iter()
        .filter_map(|e| {
            NaiveDate::parse_from_str(&e.date, DATE_FORMAT)
                .ok()
                .map(|d| (d, e))
        })
        .filter(|(d, _)| *d >= today)
        .collect();
    dated.sort_by_key(|(d, _)| *d);
    dated.into_iter().map(|(_, e)| e).collect()
}

/// What the task pane lists: the selected day, or upcoming work when no
/// day is selected.
pub fn visible_events(
    events: &[CalendarEvent],
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> Vec<&CalendarEvent> {
    match selected {
        Some(date) => events_on(events, &date_key(date)),
        None => upcoming(events, today),
    }
}
