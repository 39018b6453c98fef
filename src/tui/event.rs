//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::Clock;
use crate::error::PracticeError;
use crate::features::practice::Command;
use crate::storage::RecordStore;
use crate::tui::app::App;

/// Action to take after handling an event.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Send a command to the practice controller.
    Dispatch(Command),
}

/// Wait up to `timeout` for a terminal event and handle it.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<C: Clock + Clone, S: RecordStore>(
    app: &mut App<'_, C, S>,
    timeout: Duration,
) -> Result<Option<Action>, PracticeError> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(handle_key(app, key)),
        _ => Ok(None),
    }
}

/// Map one key press to an action.
fn handle_key<C: Clock + Clone, S: RecordStore>(
    app: &mut App<'_, C, S>,
    key: KeyEvent,
) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    // A pending delete swallows the next key
    if app.confirm_delete.is_some() {
        let yes = matches!(key.code, KeyCode::Char('y' | 'Y'));
        return app.confirm(yes).map(Action::Dispatch);
    }

    let command = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),

        // Timer controls
        KeyCode::Char('s') => Some(Command::Start),
        KeyCode::Char('p') => Some(Command::Pause),
        KeyCode::Char(' ') => Some(if app.is_running() {
            Command::Pause
        } else {
            Command::Start
        }),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Char('x') => Some(Command::Stop),

        // Section and timing option
        KeyCode::Tab | KeyCode::Char(']') => app.cycle_section(1),
        KeyCode::BackTab | KeyCode::Char('[') => app.cycle_section(-1),
        KeyCode::Char('m') => app.cycle_preset(1),
        KeyCode::Char('M') => app.cycle_preset(-1),

        // Custom minutes
        KeyCode::Char(c) if c.is_ascii_digit() && app.editing_custom() => app.push_custom_digit(c),
        KeyCode::Backspace if app.editing_custom() => app.pop_custom_digit(),

        // History
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
            None
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            app.request_delete();
            None
        }

        KeyCode::Char('?') => {
            app.toggle_help();
            None
        }

        _ => None,
    };

    command.map(Action::Dispatch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimerConfig;
    use crate::core::ManualClock;
    use crate::features::history::History;
    use crate::features::practice::{PracticeController, PresetChoice};
    use crate::storage::MemoryStore;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_mapping() {
        let clock = ManualClock::default();
        let mut practice = PracticeController::new(&clock, History::open(MemoryStore::new()));
        let config = TimerConfig::default();
        let mut app = App::new(&mut practice, &config);

        assert_eq!(handle_key(&mut app, press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Char('s'))),
            Some(Action::Dispatch(Command::Start))
        );
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Char('x'))),
            Some(Action::Dispatch(Command::Stop))
        );
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Char('m'))),
            Some(Action::Dispatch(Command::SelectPreset(PresetChoice::Minutes(5))))
        );
        assert_eq!(
            handle_key(
                &mut app,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_digits_only_edit_custom_minutes() {
        let clock = ManualClock::default();
        let mut practice = PracticeController::new(&clock, History::open(MemoryStore::new()));
        let config = TimerConfig::default();
        let mut app = App::new(&mut practice, &config);

        assert_eq!(handle_key(&mut app, press(KeyCode::Char('3'))), None);

        app.dispatch(Command::SelectPreset(PresetChoice::Custom));
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Char('3'))),
            Some(Action::Dispatch(Command::SetCustomMinutes(3)))
        );
    }

    #[test]
    fn test_space_toggles() {
        let clock = ManualClock::default();
        let mut practice = PracticeController::new(&clock, History::open(MemoryStore::new()));
        let config = TimerConfig::default();
        let mut app = App::new(&mut practice, &config);

        app.dispatch(Command::SelectSection("Reading".into()));
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Char(' '))),
            Some(Action::Dispatch(Command::Start))
        );
        app.dispatch(Command::Start);
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Char(' '))),
            Some(Action::Dispatch(Command::Pause))
        );
    }
}
