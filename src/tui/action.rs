use crate::tui::state::{Focus, FormField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Calendar
    MoveDays(i64),
    MoveMonth(bool),
    SelectToday,
    ClearSelection,
    NextTask,
    PrevTask,
    // Form
    OpenForm,
    CloseForm,
    NextField,
    PrevField,
    Input(char),
    Backspace,
    Left,
    Right,
    Submit,
    Quit,
}

/// Translates a key press into an [`Action`] for the focused pane.
pub fn from_key(focus: Focus, field: FormField, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    match focus {
        Focus::Calendar => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveDays(-1)),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveDays(1)),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveDays(-7)),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDays(7)),
            KeyCode::PageUp => Some(Action::MoveMonth(false)),
            KeyCode::PageDown => Some(Action::MoveMonth(true)),
            KeyCode::Char('J') => Some(Action::NextTask),
            KeyCode::Char('K') => Some(Action::PrevTask),
            KeyCode::Char('t') => Some(Action::SelectToday),
            KeyCode::Char('x') => Some(Action::ClearSelection),
            KeyCode::Char('a') | KeyCode::Tab => Some(Action::OpenForm),
            _ => None,
        },
        Focus::Form => match key.code {
            KeyCode::Esc => Some(Action::CloseForm),
            KeyCode::Tab => Some(Action::NextField),
            KeyCode::BackTab => Some(Action::PrevField),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Left => Some(Action::Left),
            KeyCode::Right => Some(Action::Right),
            // The type selector also cycles with space.
            KeyCode::Char(' ') if field == FormField::Type => Some(Action::Right),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
    }
}
