//! Command handling for a practice session.

use tracing::{error, info};

use super::{ButtonState, Command, PresetChoice, ViewModel};
use crate::core::Clock;
use crate::error::PracticeError;
use crate::features::history::History;
use crate::features::timer::SessionTimer;
use crate::storage::RecordStore;

/// Owns the timer and the history; everything the UI does goes through
/// here.
pub struct PracticeController<C: Clock + Clone, S: RecordStore> {
    timer: SessionTimer<C>,
    history: History<S>,
    preset: PresetChoice,
    custom_minutes: u32,
    notice: Option<String>,
}

impl<C: Clock + Clone, S: RecordStore> PracticeController<C, S> {
    /// Create a controller with an idle stopwatch over `history`.
    pub const fn new(clock: C, history: History<S>) -> Self {
        Self {
            timer: SessionTimer::new(clock),
            history,
            preset: PresetChoice::Stopwatch,
            custom_minutes: 0,
            notice: None,
        }
    }

    /// Apply a command.
    ///
    /// # Errors
    ///
    /// Returns user-input errors (no section, nothing to save, bad history
    /// index) and storage errors. State is unchanged on error.
    pub fn handle(&mut self, command: Command) -> Result<(), PracticeError> {
        match command {
            Command::SelectSection(label) => {
                self.timer.select_section(&label);
                self.notice = None;
            }
            Command::SelectPreset(choice) => self.select_preset(choice),
            Command::SetCustomMinutes(minutes) => self.apply_custom_minutes(minutes),
            Command::Start => {
                self.timer.start()?;
                self.notice = None;
            }
            Command::Pause => self.timer.pause(),
            Command::Reset => {
                self.timer.reset();
                self.notice = None;
            }
            Command::Stop => self.stop()?,
            Command::DeleteRecord(display_index) => {
                let removed = self.history.delete_displayed(display_index)?;
                self.notice = Some(format!(
                    "Deleted {} ({})",
                    removed.section,
                    removed.format_duration()
                ));
            }
        }
        Ok(())
    }

    /// Apply a command and turn any error into the on-screen notice.
    ///
    /// Returns whether the command succeeded.
    pub fn dispatch(&mut self, command: Command) -> bool {
        match self.handle(command) {
            Ok(()) => true,
            Err(e) => {
                if !e.is_user_input() {
                    error!(error = %e, "command failed");
                }
                self.notice = Some(e.to_string());
                false
            }
        }
    }

    /// Periodic recompute; call every tick interval.
    ///
    /// Returns true on the tick a countdown runs out.
    pub fn tick(&mut self) -> bool {
        let expired = self.timer.tick();
        if expired {
            info!(section = ?self.timer.current_section(), "countdown finished, now in overtime");
            self.notice = Some("Time's up!".to_string());
        }
        expired
    }

    /// Everything the UI needs to draw.
    #[must_use]
    pub fn view(&self) -> ViewModel {
        ViewModel {
            display: self.timer.display(),
            mode: self.timer.mode(),
            state: self.timer.state(),
            preset: self.preset,
            custom_minutes: self.custom_minutes,
            section: self.timer.current_section().map(String::from),
            buttons: self.buttons(),
            stats: self.history.stats(),
            history: self.history.rows(),
            time_up: self.timer.is_time_up(),
            notice: self.notice.clone(),
        }
    }

    /// Usable controls.
    #[must_use]
    pub fn buttons(&self) -> ButtonState {
        ButtonState {
            start: !self.timer.is_running(),
            pause: self.timer.is_running(),
            reset: self.timer.can_reset(),
            stop: self.timer.can_stop(),
        }
    }

    /// The timer.
    #[must_use]
    pub const fn timer(&self) -> &SessionTimer<C> {
        &self.timer
    }

    /// The history.
    #[must_use]
    pub const fn history(&self) -> &History<S> {
        &self.history
    }

    /// Selected timing option.
    #[must_use]
    pub const fn preset(&self) -> PresetChoice {
        self.preset
    }

    /// Value of the custom-minutes field.
    #[must_use]
    pub const fn custom_minutes(&self) -> u32 {
        self.custom_minutes
    }

    /// Replace the notice line.
    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    /// Clear the notice line.
    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    fn select_preset(&mut self, choice: PresetChoice) {
        match choice {
            PresetChoice::Stopwatch => {
                self.preset = choice;
                self.timer.use_stopwatch();
            }
            PresetChoice::Minutes(minutes) => {
                self.preset = choice;
                self.timer.set_preset_duration(minutes);
            }
            PresetChoice::Custom => self.apply_custom_minutes(self.custom_minutes),
        }
    }

    /// Switch to the custom option, unless the running timer refuses it.
    fn apply_custom_minutes(&mut self, minutes: u32) {
        if self.timer.set_custom_minutes(minutes) {
            self.custom_minutes = minutes;
            self.preset = PresetChoice::Custom;
        } else {
            self.notice = Some("Stop or reset the timer to use a custom time".to_string());
        }
    }

    fn stop(&mut self) -> Result<(), PracticeError> {
        let before = self.timer.clone();
        let record = self.timer.stop()?;

        if let Err(e) = self.history.append(record.clone()) {
            // Keep the session on the clock so it can be saved again
            self.timer = before;
            return Err(e);
        }

        info!(section = %record.section, duration_ms = record.duration_ms, "session saved");
        self.notice = Some(format!(
            "Saved {} ({})",
            record.section,
            record.format_duration()
        ));
        Ok(())
    }
}
