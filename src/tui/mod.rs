// File: ./src/tui/mod.rs
pub mod action;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::status::{StatusExpired, StatusTimer};
use crate::store::CalendarStore;
use crate::tui::state::AppState;
use crate::tui::view::draw;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        use std::io::Write;
        restore_terminal();
        let path = crate::logging::log_path().unwrap_or_else(|| "furrow_panic.log".into());
        if let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
        {
            let _ = writeln!(file, "PANIC: {:?}", info);
        }
        default_hook(info);
    }));
}

pub async fn run(config: Config) -> Result<()> {
    install_panic_hook();

    let today = config.today();
    let (expiry_tx, mut expiry_rx) = mpsc::channel(10);
    let store = CalendarStore::new(config.seed(), Some(today))
        .with_timer(StatusTimer::new(config.status_timeout(), expiry_tx));
    let mut app_state = AppState::new(store, today);
    tracing::info!(today = %today, events = app_state.store.events.len(), "starting calendar");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app_state, &mut expiry_rx, config.tick_rate());

    restore_terminal();
    terminal.show_cursor()?;
    result
}

/// Applies any status expiries that have arrived.
pub fn drain_expiries(app_state: &mut AppState, expiry_rx: &mut mpsc::Receiver<StatusExpired>) {
    while let Ok(StatusExpired(generation)) = expiry_rx.try_recv() {
        if app_state.store.status.expire(generation) {
            tracing::debug!(generation, "status message expired");
        }
    }
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    expiry_rx: &mut mpsc::Receiver<StatusExpired>,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app_state))?;

        drain_expiries(app_state, expiry_rx);

        if event::poll(tick_rate)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = action::from_key(app_state.focus, app_state.field, key)
        {
            app_state.apply(action);
        }

        if app_state.should_quit {
            tracing::info!("quitting");
            return Ok(());
        }
    }
}
