//! Terminal User Interface (TUI) for practimer.
//!
//! The interactive presentation layer: renders the practice controller's
//! view and turns key presses into commands. Built with ratatui and
//! crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

use crate::config::TimerConfig;
use crate::core::Clock;
use crate::error::PracticeError;
use crate::features::practice::PracticeController;
use crate::storage::RecordStore;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub fn run<C: Clock + Clone, S: RecordStore>(
    practice: &mut PracticeController<C, S>,
    config: &TimerConfig,
) -> Result<(), PracticeError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("tui started");
    let mut app = App::new(practice, config);
    let result = run_app(&mut terminal, &mut app, Duration::from_millis(config.tick_interval_ms));

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
    info!("tui stopped");

    result
}

/// Run the main application loop.
///
/// Input is polled with the tick interval as timeout, so the timer is
/// recomputed at least that often.
fn run_app<B: Backend, C: Clock + Clone, S: RecordStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<'_, C, S>,
    tick_interval: Duration,
) -> Result<(), PracticeError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Some(action) = event::handle_events(app, tick_interval)? {
            match action {
                event::Action::Quit => break,
                event::Action::Dispatch(command) => app.dispatch(command),
            }
        }

        app.tick();
    }

    Ok(())
}
