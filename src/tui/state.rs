use crate::store::CalendarStore;
use crate::tui::action::Action;
use chrono::NaiveDate;
use ratatui::widgets::ListState;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Calendar,
    Form,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormField {
    Title,
    Date,
    Type,
    Notes,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Title,
        FormField::Date,
        FormField::Type,
        FormField::Notes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Task Title",
            FormField::Date => "Date",
            FormField::Type => "Task Type",
            FormField::Notes => "Notes",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

pub struct AppState {
    pub store: CalendarStore,
    pub today: NaiveDate,
    pub focus: Focus,
    pub field: FormField,
    /// Cursor inside the focused text field, in chars.
    pub cursor_position: usize,
    /// Selection and scroll offset of the task pane.
    pub list_state: ListState,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(store: CalendarStore, today: NaiveDate) -> Self {
        Self {
            store,
            today,
            focus: Focus::Calendar,
            field: FormField::Title,
            cursor_position: 0,
            list_state: ListState::default().with_selected(Some(0)),
            should_quit: false,
        }
    }

    fn task_count(&self) -> usize {
        self.store.visible(self.today).len()
    }

    /// Back to the first card, e.g. after the selected day changed.
    pub fn reset_task_scroll(&mut self) {
        self.list_state = ListState::default().with_selected(Some(0));
    }

    pub fn next_task(&mut self) {
        let len = self.task_count();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous_task(&mut self) {
        let len = self.task_count();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => (i - 1).min(len - 1),
        };
        self.list_state.select(Some(i));
    }

    /// The text behind the focused field, or `None` for the type selector.
    fn field_buffer(&mut self) -> Option<&mut String> {
        let draft = self.store.draft_mut();
        match self.field {
            FormField::Title => Some(&mut draft.title),
            FormField::Date => Some(&mut draft.date),
            FormField::Notes => Some(&mut draft.notes),
            FormField::Type => None,
        }
    }

    pub fn field_text(&self) -> &str {
        let draft = &self.store.draft;
        match self.field {
            FormField::Title => &draft.title,
            FormField::Date => &draft.date,
            FormField::Notes => &draft.notes,
            FormField::Type => draft.kind.label(),
        }
    }

    fn field_len(&self) -> usize {
        self.field_text().chars().count()
    }

    fn focus_field(&mut self, field: FormField) {
        self.field = field;
        self.cursor_position = self.field_len();
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor_position = (self.cursor_position + 1).min(self.field_len());
    }

    pub fn enter_char(&mut self, new_char: char) {
        let cursor = self.cursor_position;
        if let Some(buffer) = self.field_buffer() {
            let byte_idx = buffer
                .char_indices()
                .nth(cursor)
                .map(|(i, _)| i)
                .unwrap_or(buffer.len());
            buffer.insert(byte_idx, new_char);
            self.move_cursor_right();
        }
    }

    pub fn delete_char(&mut self) {
        let cursor = self.cursor_position;
        if cursor == 0 {
            return;
        }
        if let Some(buffer) = self.field_buffer() {
            let before = buffer.chars().take(cursor - 1);
            let after = buffer.chars().skip(cursor);
            *buffer = before.chain(after).collect();
            self.move_cursor_left();
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::MoveDays(days) => {
                self.store.shift_selection(days, self.today);
                self.reset_task_scroll();
            }
            Action::MoveMonth(forward) => {
                self.store.shift_month(forward, self.today);
                self.reset_task_scroll();
            }
            Action::SelectToday => {
                self.store.select_date(self.today);
                self.reset_task_scroll();
            }
            Action::ClearSelection => {
                self.store.clear_selection();
                self.reset_task_scroll();
            }
            Action::NextTask => self.next_task(),
            Action::PrevTask => self.previous_task(),

            Action::OpenForm => {
                self.focus = Focus::Form;
                self.focus_field(FormField::Title);
            }
            Action::CloseForm => self.focus = Focus::Calendar,
            Action::NextField => self.focus_field(self.field.next()),
            Action::PrevField => self.focus_field(self.field.previous()),
            Action::Input(c) => self.enter_char(c),
            Action::Backspace => self.delete_char(),
            Action::Left => {
                if self.field == FormField::Type {
                    let draft = self.store.draft_mut();
                    draft.kind = draft.kind.previous();
                } else {
                    self.move_cursor_left();
                }
            }
            Action::Right => {
                if self.field == FormField::Type {
                    let draft = self.store.draft_mut();
                    draft.kind = draft.kind.next();
                } else {
                    self.move_cursor_right();
                }
            }
            Action::Submit => {
                if self.store.add_task().is_ok() {
                    self.focus_field(FormField::Title);
                }
            }
            Action::Quit => self.should_quit = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskType;

    fn app() -> AppState {
        let today = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();
        AppState::new(CalendarStore::seeded(today), today)
    }

    fn type_str(state: &mut AppState, s: &str) {
        for c in s.chars() {
            state.apply(Action::Input(c));
        }
    }

    #[test]
    fn editing_respects_cursor_with_multibyte_chars() {
        let mut state = app();
        state.apply(Action::OpenForm);
        type_str(&mut state, "Mäize");
        state.apply(Action::Left);
        state.apply(Action::Left);
        state.apply(Action::Backspace);
        type_str(&mut state, "ï");
        assert_eq!(state.store.draft.title, "Mäïze");
        assert_eq!(state.cursor_position, 3);
    }

    #[test]
    fn type_selector_cycles_and_ignores_typing() {
        let mut state = app();
        state.apply(Action::OpenForm);
        state.apply(Action::NextField);
        state.apply(Action::NextField);
        assert_eq!(state.field, FormField::Type);
        state.apply(Action::Input('z'));
        state.apply(Action::Right);
        state.apply(Action::Right);
        state.apply(Action::Right);
        assert_eq!(state.store.draft.kind, TaskType::PestControl);
        state.apply(Action::Left);
        assert_eq!(state.store.draft.kind, TaskType::Fertilizing);
        state.apply(Action::PrevField);
        assert_eq!(state.field, FormField::Date);
    }

    #[test]
    fn submit_from_form_resets_to_title() {
        let mut state = app();
        state.apply(Action::OpenForm);
        type_str(&mut state, "Scout Fields");
        state.apply(Action::NextField);
        type_str(&mut state, "2025-04-15");
        state.apply(Action::Submit);
        assert_eq!(state.store.events.len(), 5);
        assert_eq!(state.field, FormField::Title);
        assert_eq!(state.cursor_position, 0);
        assert_eq!(state.store.visible(state.today).len(), 2);
    }

    #[test]
    fn task_scroll_wraps_and_resets_on_day_change() {
        let mut state = app();
        for title in ["Second", "Third"] {
            state.store.draft.title = title.to_string();
            state.store.draft.date = "2025-04-15".to_string();
            state.store.add_task().unwrap();
        }
        state.apply(Action::NextTask);
        state.apply(Action::NextTask);
        assert_eq!(state.list_state.selected(), Some(2));
        state.apply(Action::NextTask);
        assert_eq!(state.list_state.selected(), Some(0));
        state.apply(Action::PrevTask);
        assert_eq!(state.list_state.selected(), Some(2));

        state.apply(Action::MoveDays(1));
        assert_eq!(state.list_state.selected(), Some(0));
        // Nothing on the 16th: scrolling is a no-op
        state.apply(Action::NextTask);
        assert_eq!(state.list_state.selected(), Some(0));
    }

    #[test]
    fn calendar_actions_drive_selection() {
        let mut state = app();
        state.apply(Action::MoveDays(7));
        assert_eq!(state.store.selected_key().as_deref(), Some("2025-04-22"));
        state.apply(Action::ClearSelection);
        state.apply(Action::MoveDays(-1));
        assert_eq!(state.store.selected_key().as_deref(), Some("2025-04-14"));
        state.apply(Action::SelectToday);
        assert_eq!(state.store.selected, Some(state.today));
        state.apply(Action::Quit);
        assert!(state.should_quit);
    }
}
