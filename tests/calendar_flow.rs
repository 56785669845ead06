use chrono::NaiveDate;
use furrow::filter::{date_key, events_on};
use furrow::model::{CalendarEvent, TaskDraft, TaskType};
use furrow::store::{ADDED_MESSAGE, AddTaskError, CalendarStore};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_scout_fields_scenario() {
    // 1. Fresh calendar with the four seed tasks
    let mut store = CalendarStore::seeded(day(2025, 4, 15));
    assert_eq!(store.events.len(), 4);

    // 2. Select May 10
    store.select_date(day(2025, 5, 10));
    let today = day(2025, 4, 15);
    assert_eq!(
        store.visible(today),
        vec![&CalendarEvent::new("2025-05-10", "Complete Corn Planting", "planting")]
    );

    // 3. Submit a pest-control task on the same day
    store.draft.title = "Scout Fields".to_string();
    store.draft.date = "2025-05-10".to_string();
    store.draft.kind = "Pest Control".parse::<TaskType>().unwrap();
    store.add_task().unwrap();

    // 4. Re-query
    assert_eq!(store.events.len(), 5);
    let found = store.visible(today);
    assert_eq!(found.len(), 2);
    assert_eq!(
        found[1],
        &CalendarEvent::new("2025-05-10", "Scout Fields", "pest control")
    );
    assert_eq!(store.draft, TaskDraft::default());
    assert_eq!(store.message(), Some(ADDED_MESSAGE));
}

#[test]
fn test_rejected_draft_keeps_everything() {
    let mut store = CalendarStore::seeded(day(2025, 4, 15));
    store.draft.title = "Scout Fields".to_string();
    store.draft.notes = "north edge".to_string();

    assert_eq!(store.add_task(), Err(AddTaskError::MissingFields));
    assert_eq!(store.events.len(), 4);
    assert_eq!(store.draft.title, "Scout Fields");
    assert_eq!(store.draft.notes, "north edge");
    assert_eq!(store.message(), Some("Please enter a title and date."));

    // A later success overwrites the prompt
    store.draft.date = "2025-06-02".to_string();
    store.add_task().unwrap();
    assert_eq!(store.message(), Some(ADDED_MESSAGE));
}

#[test]
fn test_selection_normalizes_to_local_calendar_day() {
    let store = CalendarStore::seeded(day(2025, 4, 15));
    assert_eq!(store.selected_key().as_deref(), Some("2025-04-15"));
    let seed = &store.events;
    assert_eq!(events_on(seed, &date_key(day(2025, 4, 15))).len(), 1);
    assert!(events_on(seed, &date_key(day(2025, 1, 1))).is_empty());
}

#[test]
fn test_no_selection_lists_upcoming() {
    let mut store = CalendarStore::seeded(day(2025, 4, 21));
    store.clear_selection();
    let titles: Vec<&str> = store
        .visible(day(2025, 4, 21))
        .iter()
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["Irrigation System Maintenance", "Complete Corn Planting"]
    );
}
