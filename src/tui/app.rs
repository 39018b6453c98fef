//! Application state for the TUI.

use crate::config::TimerConfig;
use crate::core::Clock;
use crate::features::practice::{Command, PracticeController, PresetChoice, ViewModel};
use crate::features::timer::parse_minutes;
use crate::storage::RecordStore;

/// Application state.
pub struct App<'a, C: Clock + Clone, S: RecordStore> {
    practice: &'a mut PracticeController<C, S>,
    /// Section labels to cycle through.
    pub sections: Vec<String>,
    /// Timing options to cycle through: stopwatch, each preset, custom.
    pub choices: Vec<PresetChoice>,
    /// Selected history row (display order).
    pub selected: usize,
    /// Digits typed into the custom-minutes field.
    pub custom_input: String,
    /// History row awaiting delete confirmation.
    pub confirm_delete: Option<usize>,
    /// Whether the key help is shown.
    pub show_help: bool,
}

impl<'a, C: Clock + Clone, S: RecordStore> App<'a, C, S> {
    /// Create a new app instance.
    pub fn new(practice: &'a mut PracticeController<C, S>, config: &TimerConfig) -> Self {
        let mut choices = vec![PresetChoice::Stopwatch];
        choices.extend(config.presets.iter().copied().map(PresetChoice::Minutes));
        choices.push(PresetChoice::Custom);

        let custom_input = match practice.custom_minutes() {
            0 => String::new(),
            n => n.to_string(),
        };

        Self {
            practice,
            sections: config.sections.clone(),
            choices,
            selected: 0,
            custom_input,
            confirm_delete: None,
            show_help: false,
        }
    }

    /// Current view of the controller.
    pub fn view(&self) -> ViewModel {
        self.practice.view()
    }

    /// Send a command; failures land in the notice line.
    pub fn dispatch(&mut self, command: Command) {
        self.practice.dispatch(command);
        self.clamp_selection();
    }

    /// Periodic recompute.
    pub fn tick(&mut self) {
        self.practice.tick();
    }

    /// Whether the running timer should be paused rather than started.
    pub fn is_running(&self) -> bool {
        self.practice.timer().is_running()
    }

    /// Whether the custom-minutes field is active.
    pub fn editing_custom(&self) -> bool {
        self.practice.preset() == PresetChoice::Custom
    }

    /// Command selecting the section `step` places away from the current one.
    pub fn cycle_section(&self, step: isize) -> Option<Command> {
        let current = self
            .practice
            .timer()
            .current_section()
            .and_then(|s| self.sections.iter().position(|label| label == s));
        let next = cycle(current, step, self.sections.len())?;
        Some(Command::SelectSection(self.sections[next].clone()))
    }

    /// Command selecting the timing option `step` places away from the
    /// current one.
    pub fn cycle_preset(&self, step: isize) -> Option<Command> {
        let current = self.choices.iter().position(|c| *c == self.practice.preset());
        let next = cycle(current, step, self.choices.len())?;
        Some(Command::SelectPreset(self.choices[next]))
    }

    /// Append a digit to the custom-minutes field.
    pub fn push_custom_digit(&mut self, digit: char) -> Option<Command> {
        if self.custom_input.len() >= 4 {
            return None;
        }
        self.custom_input.push(digit);
        self.custom_command()
    }

    /// Remove the last digit of the custom-minutes field.
    pub fn pop_custom_digit(&mut self) -> Option<Command> {
        self.custom_input.pop();
        self.custom_command()
    }

    fn custom_command(&self) -> Option<Command> {
        let minutes = if self.custom_input.is_empty() {
            0
        } else {
            parse_minutes(&self.custom_input)?
        };
        Some(Command::SetCustomMinutes(minutes))
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        let len = self.practice.history().len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// Ask for confirmation before deleting the selected row.
    pub fn request_delete(&mut self) {
        if self.selected < self.practice.history().len() {
            self.confirm_delete = Some(self.selected);
        } else {
            self.practice.set_notice("Nothing to delete");
        }
    }

    /// Resolve a pending delete confirmation.
    pub fn confirm(&mut self, yes: bool) -> Option<Command> {
        let index = self.confirm_delete.take()?;
        if yes {
            Some(Command::DeleteRecord(index))
        } else {
            self.practice.set_notice("Deletion canceled");
            None
        }
    }

    /// Show or hide the key help.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.practice.clear_notice();
    }

    fn clamp_selection(&mut self) {
        let len = self.practice.history().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

/// Step through `len` slots, wrapping around. No current slot starts from
/// the first (forward) or last (backward).
fn cycle(current: Option<usize>, step: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = isize::try_from(len).ok()?;
    let next = match current.and_then(|c| isize::try_from(c).ok()) {
        Some(c) => (c + step).rem_euclid(len),
        None if step >= 0 => 0,
        None => len - 1,
    };
    usize::try_from(next).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ManualClock;
    use crate::features::history::History;
    use crate::storage::MemoryStore;

    fn practice(clock: &ManualClock) -> PracticeController<&ManualClock, MemoryStore> {
        PracticeController::new(clock, History::open(MemoryStore::new()))
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(cycle(Some(0), 1, 3), Some(1));
        assert_eq!(cycle(Some(2), 1, 3), Some(0));
        assert_eq!(cycle(Some(0), -1, 3), Some(2));
        assert_eq!(cycle(None, 1, 3), Some(0));
        assert_eq!(cycle(None, -1, 3), Some(2));
        assert_eq!(cycle(None, 1, 0), None);
    }

    #[test]
    fn test_choices_include_stopwatch_and_custom() {
        let clock = ManualClock::default();
        let mut practice = practice(&clock);
        let config = TimerConfig::default();
        let app = App::new(&mut practice, &config);

        assert_eq!(app.choices.first(), Some(&PresetChoice::Stopwatch));
        assert_eq!(app.choices.last(), Some(&PresetChoice::Custom));
        assert_eq!(app.choices.len(), config.presets.len() + 2);
    }

    #[test]
    fn test_cycle_section_and_preset() {
        let clock = ManualClock::default();
        let mut practice = practice(&clock);
        let config = TimerConfig::default();
        let mut app = App::new(&mut practice, &config);

        let first = app.cycle_section(1).unwrap();
        assert_eq!(first, Command::SelectSection("Reading".to_string()));
        app.dispatch(first);
        assert_eq!(
            app.cycle_section(1),
            Some(Command::SelectSection("Listening".to_string()))
        );

        assert_eq!(
            app.cycle_preset(1),
            Some(Command::SelectPreset(PresetChoice::Minutes(5)))
        );
        assert_eq!(app.cycle_preset(-1), Some(Command::SelectPreset(PresetChoice::Custom)));
    }

    #[test]
    fn test_custom_digits() {
        let clock = ManualClock::default();
        let mut practice = practice(&clock);
        let config = TimerConfig::default();
        let mut app = App::new(&mut practice, &config);

        assert_eq!(app.push_custom_digit('4'), Some(Command::SetCustomMinutes(4)));
        assert_eq!(app.push_custom_digit('5'), Some(Command::SetCustomMinutes(45)));
        assert_eq!(app.pop_custom_digit(), Some(Command::SetCustomMinutes(4)));
        assert_eq!(app.pop_custom_digit(), Some(Command::SetCustomMinutes(0)));
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let clock = ManualClock::default();
        let mut practice = practice(&clock);
        let config = TimerConfig::default();
        let mut app = App::new(&mut practice, &config);

        app.dispatch(Command::SelectSection("Reading".into()));
        app.dispatch(Command::Start);
        clock.advance_ms(1_000);
        app.dispatch(Command::Stop);

        app.request_delete();
        assert_eq!(app.confirm_delete, Some(0));
        assert_eq!(app.confirm(false), None);
        assert_eq!(app.view().history.len(), 1);

        app.request_delete();
        let command = app.confirm(true).unwrap();
        app.dispatch(command);
        assert!(app.view().history.is_empty());
        assert_eq!(app.selected, 0);
    }
}
