use crate::filter::date_key;
use crate::model::{CalendarEvent, resolve_icon};
use crate::season::OVERVIEW;
use crate::store::ADDED_MESSAGE;
use crate::tui::state::{AppState, Focus, FormField};
use chrono::{Datelike, NaiveDate, Weekday};
use unicode_width::UnicodeWidthStr;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

/// The part of `text` shown in a field `avail` columns wide, scrolled so
/// the cursor (a char index) stays inside it. Returns the visible text and
/// the cursor column relative to the field start.
pub fn field_window(text: &str, cursor: usize, avail: usize) -> (String, u16) {
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());
    let width_of = |from: usize| -> usize {
        chars[from..cursor].iter().collect::<String>().width()
    };
    let mut start = 0;
    // Keep one free cell for the cursor itself.
    while start < cursor && width_of(start) >= avail.max(1) {
        start += 1;
    }
    let shown: String = chars[start..].iter().collect();
    (shown, width_of(start) as u16)
}

/// Weeks of `year`/`month`, Monday first. Days outside the month are `None`.
pub fn month_weeks(year: i32, month: u32) -> Vec<[Option<u32>; 7]> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return vec![];
    };
    let offset = first.weekday().num_days_from_monday() as usize;
    let days_in_month = first
        .checked_add_months(chrono::Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28);

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = offset;
    for day in 1..=days_in_month {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

fn draw_calendar(f: &mut Frame, state: &AppState, area: Rect) {
    let shown = state.store.selected.unwrap_or(state.today);
    let busy = state.store.busy_days(shown.year(), shown.month());

    let mut lines = vec![
        Line::from(Span::styled(
            shown.format("%B %Y").to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(
            [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
                Weekday::Sun,
            ]
            .iter()
            .map(|w| Span::styled(format!("{:>3}", &w.to_string()[..2]), Style::default().fg(Color::DarkGray)))
            .collect::<Vec<_>>(),
        ),
    ];

    for week in month_weeks(shown.year(), shown.month()) {
        let spans: Vec<Span> = week
            .iter()
            .map(|slot| match slot {
                None => Span::raw("   "),
                Some(day) => {
                    let date = NaiveDate::from_ymd_opt(shown.year(), shown.month(), *day);
                    let mut style = Style::default();
                    if busy.contains(day) {
                        style = style.fg(Color::Green);
                    }
                    if date == Some(state.today) {
                        style = style.add_modifier(Modifier::UNDERLINED);
                    }
                    if date.is_some() && date == state.store.selected {
                        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                    }
                    Span::styled(format!("{:>3}", day), style)
                }
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let border_style = if state.focus == Focus::Calendar {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let calendar = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" CALENDAR ")
            .border_style(border_style),
    );
    f.render_widget(calendar, area);
}

fn draw_form(f: &mut Frame, state: &AppState, area: Rect) {
    let draft = &state.store.draft;
    let focused = state.focus == Focus::Form;
    let label_width = FormField::ALL
        .iter()
        .map(|fld| fld.label().len())
        .max()
        .unwrap_or(0)
        + 2;

    let avail = (area.width as usize).saturating_sub(2 + label_width);
    let editing = focused && state.field != FormField::Type;
    let (window, cursor_col) = field_window(state.field_text(), state.cursor_position, avail);

    let mut lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|&fld| {
            let value = match fld {
                _ if editing && state.field == fld => window.clone(),
                FormField::Title => draft.title.clone(),
                FormField::Date if draft.date.is_empty() && !(focused && state.field == fld) => {
                    "YYYY-MM-DD".to_string()
                }
                FormField::Date => draft.date.clone(),
                FormField::Type => format!("◂ {} {} ▸", draft.kind.icon().glyph, draft.kind.label()),
                FormField::Notes => draft.notes.clone(),
            };
            let label_style = if focused && state.field == fld {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let value_style = if fld == FormField::Date && draft.date.is_empty() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(format!("{:<width$}", format!("{}:", fld.label()), width = label_width), label_style),
                Span::styled(value, value_style),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] + Add to Calendar",
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )));

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" ADD TASK ")
            .border_style(border_style),
    );
    f.render_widget(form, area);

    if editing {
        let cursor_x = area.x + 1 + label_width as u16 + cursor_col;
        let cursor_y = area.y + 1 + state.field.index() as u16;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}

fn task_card(event: &CalendarEvent) -> ListItem<'_> {
    let icon = resolve_icon(&event.kind);
    let (r, g, b) = icon.rgb;
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(format!(" {} ", icon.glyph), Style::default().fg(Color::Rgb(r, g, b))),
            Span::styled(event.title.as_str(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled("  →", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            format!("    {}", event.date),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}

fn draw_tasks(f: &mut Frame, state: &mut AppState, area: Rect) {
    let title = match state.store.selected {
        Some(date) => format!(" TASKS ON {} ", date_key(date)),
        None => " UPCOMING TASKS ".to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let events = state.store.visible(state.today);

    if events.is_empty() {
        let empty = Paragraph::new("No tasks for this date.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
    } else {
        let items: Vec<ListItem> = events.into_iter().map(task_card).collect();
        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        );
        f.render_stateful_widget(list, area, &mut state.list_state);
    }
}

fn draw_seasons(f: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for season in OVERVIEW.iter() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            season.heading(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for note in season.notes {
            lines.push(Line::from(Span::styled(
                format!("  • {}", note),
                Style::default().fg(Color::Gray),
            )));
        }
    }
    let overview = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" SEASONAL OVERVIEW "));
    f.render_widget(overview, area);
}

fn draw_footer(f: &mut Frame, state: &AppState, area: Rect) {
    let f_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let message = state.store.message().unwrap_or("");
    let status_color = if message == ADDED_MESSAGE {
        Color::Green
    } else {
        Color::Red
    };
    let status = Paragraph::new(message.to_string())
        .style(Style::default().fg(status_color))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                .title(" Status "),
        );

    let help_text = match state.focus {
        Focus::Calendar => "←→↑↓:Day | PgUp/PgDn:Month | J/K:Tasks | t:Today | x:Clear | a:Add | q:Quit",
        Focus::Form => "Tab:Field | ←→:Type | Enter:Add | Esc:Back",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                .title(" Actions "),
        );
    f.render_widget(status, f_chunks[0]);
    f.render_widget(help, f_chunks[1]);
}

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(v_chunks[0]);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(0)])
        .split(h_chunks[0]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(h_chunks[1]);

    draw_calendar(f, state, left_chunks[0]);
    draw_form(f, state, left_chunks[1]);
    draw_tasks(f, state, right_chunks[0]);
    draw_seasons(f, right_chunks[1]);
    draw_footer(f, state, v_chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn april_2025_starts_on_tuesday() {
        let weeks = month_weeks(2025, 4);
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0], [None, Some(1), Some(2), Some(3), Some(4), Some(5), Some(6)]);
        assert_eq!(weeks[4][2], Some(30));
        assert_eq!(weeks[4][3], None);
    }

    #[test]
    fn field_window_measures_wide_chars() {
        assert_eq!(field_window("日本語", 3, 20), ("日本語".to_string(), 6));
        assert_eq!(field_window("🌽 corn", 1, 20), ("🌽 corn".to_string(), 2));
        assert_eq!(field_window("abc", 1, 20), ("abc".to_string(), 1));
    }

    #[test]
    fn field_window_scrolls_long_text() {
        assert_eq!(field_window("abcdefghij", 10, 5), ("ghij".to_string(), 4));
        let (shown, col) = field_window("日本語日本語", 5, 5);
        assert_eq!(shown, "日本語");
        assert_eq!(col, 4);
        // Cursor near the start keeps the head visible.
        assert_eq!(field_window("abcdefghij", 2, 5), ("abcdefghij".to_string(), 2));
    }

    #[test]
    fn february_leap_year() {
        let days: usize = month_weeks(2024, 2)
            .iter()
            .map(|w| w.iter().flatten().count())
            .sum();
        assert_eq!(days, 29);
        assert!(month_weeks(2025, 13).is_empty());
    }
}
