// File: ./src/model/mod.rs
// Aggregates the split model files
pub mod draft;
pub mod event;
pub mod icon;

pub use draft::TaskDraft;
pub use event::{CalendarEvent, TaskType, seed_events};
pub use icon::{TaskIcon, resolve_icon};
