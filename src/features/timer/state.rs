//! The session timer state machine.
//!
//! Live values are always derived from the wall-clock distance to a
//! reference instant captured on `start`. Nothing is ever accumulated per
//! tick, so the displayed time does not depend on how often `tick` runs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::format::{format_duration, minutes_to_ms};
use crate::core::Clock;
use crate::error::UserInputError;
use crate::features::history::SessionRecord;

/// Which way the timer counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    /// Count up from zero.
    Elapsed,
    /// Count down from a preset; may go negative (overtime).
    Countdown,
}

impl std::fmt::Display for TimerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Elapsed => write!(f, "Stopwatch"),
            Self::Countdown => write!(f, "Countdown"),
        }
    }
}

/// Coarse lifecycle state, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    /// Nothing timed since the last reset.
    Idle,
    /// Timer is running
    Running,
    /// Timer is paused with time on the clock
    Paused,
}

impl std::fmt::Display for TimerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Running => write!(f, "Running"),
            Self::Paused => write!(f, "Paused"),
        }
    }
}

/// Timer for one labeled practice session.
///
/// Owned by whoever composes the application and driven through `&mut self`
/// methods, so transitions never interleave with a tick.
#[derive(Debug, Clone)]
pub struct SessionTimer<C: Clock> {
    clock: C,
    mode: TimerMode,
    running: bool,
    /// Countdown length; zero in Elapsed mode.
    preset_ms: i64,
    /// Frozen value while stopped: elapsed (>= 0) or remaining (signed).
    value_ms: i64,
    /// Wall-clock anchor captured on start.
    reference_ms: i64,
    /// Remaining time when the countdown was last started.
    snapshot_ms: i64,
    current_section: Option<String>,
    time_up: bool,
}

impl<C: Clock> SessionTimer<C> {
    /// Create an idle stopwatch with no section selected.
    pub const fn new(clock: C) -> Self {
        Self {
            clock,
            mode: TimerMode::Elapsed,
            running: false,
            preset_ms: 0,
            value_ms: 0,
            reference_ms: 0,
            snapshot_ms: 0,
            current_section: None,
            time_up: false,
        }
    }

    /// Choose the section label for the next record. Blank labels clear it.
    pub fn select_section(&mut self, label: &str) {
        let label = label.trim();
        self.current_section = if label.is_empty() {
            None
        } else {
            Some(label.to_string())
        };
        debug!(section = ?self.current_section, "section selected");
    }

    /// Forget the selected section.
    pub fn clear_section(&mut self) {
        self.current_section = None;
    }

    /// Start or resume.
    ///
    /// # Errors
    ///
    /// Returns [`UserInputError::NoSectionSelected`] when no section is set;
    /// the timer is left untouched.
    pub fn start(&mut self) -> Result<(), UserInputError> {
        if self.current_section.is_none() {
            return Err(UserInputError::NoSectionSelected);
        }
        if self.running {
            return Ok(());
        }

        let now = self.clock.now_ms();
        match self.mode {
            TimerMode::Elapsed => self.reference_ms = now - self.value_ms,
            TimerMode::Countdown => {
                self.reference_ms = now;
                self.snapshot_ms = self.value_ms;
            }
        }
        self.running = true;
        debug!(mode = %self.mode, value_ms = self.value_ms, "timer started");
        Ok(())
    }

    /// Freeze the current value. No-op when not running.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.value_ms = self.live_ms();
        self.running = false;
        self.latch_time_up();
        debug!(value_ms = self.value_ms, "timer paused");
    }

    /// Stop and return to the starting value of the current mode.
    ///
    /// Countdown goes back to the full preset and clears the time-up flag.
    pub fn reset(&mut self) {
        self.running = false;
        self.value_ms = match self.mode {
            TimerMode::Elapsed => 0,
            TimerMode::Countdown => self.preset_ms,
        };
        self.time_up = false;
        debug!(mode = %self.mode, "timer reset");
    }

    /// Finish the session and produce its record.
    ///
    /// Pauses first if running. On success the section is cleared and the
    /// timer reset. Countdown overtime counts toward the recorded time.
    ///
    /// # Errors
    ///
    /// Returns [`UserInputError::NoValidRecord`] when no section is set or
    /// no time was used.
    pub fn stop(&mut self) -> Result<SessionRecord, UserInputError> {
        self.pause();

        let used = self.used_ms();
        let section = match self.current_section.as_deref() {
            Some(section) if used > 0 => section.to_string(),
            _ => return Err(UserInputError::NoValidRecord),
        };

        let record = SessionRecord::new(
            section,
            u64::try_from(used.max(0)).unwrap_or_default(),
            self.clock.now(),
        );
        self.current_section = None;
        self.reset();
        debug!(section = %record.section, duration_ms = record.duration_ms, "session stopped");
        Ok(record)
    }

    /// Switch to a countdown of `minutes` and rewind to its full length.
    ///
    /// A running timer keeps running from the new preset.
    pub fn set_preset_duration(&mut self, minutes: u32) {
        self.mode = TimerMode::Countdown;
        self.preset_ms = minutes_to_ms(minutes);
        self.value_ms = self.preset_ms;
        self.time_up = false;
        if self.running {
            self.reference_ms = self.clock.now_ms();
            self.snapshot_ms = self.preset_ms;
        }
        debug!(minutes, "preset selected");
    }

    /// Apply the custom-minutes field.
    ///
    /// While idle this re-arms a countdown of `minutes`. While running it is
    /// only honored as a starting offset for a stopwatch that has not
    /// counted anything yet. Returns whether the value was applied.
    pub fn set_custom_minutes(&mut self, minutes: u32) -> bool {
        if !self.running {
            self.set_preset_duration(minutes);
            return true;
        }

        if self.mode == TimerMode::Elapsed && self.live_ms() == 0 {
            self.value_ms = minutes_to_ms(minutes);
            self.reference_ms = self.clock.now_ms() - self.value_ms;
            debug!(minutes, "stopwatch offset applied");
            return true;
        }

        false
    }

    /// Leave countdown mode and count up from zero.
    pub fn use_stopwatch(&mut self) {
        self.mode = TimerMode::Elapsed;
        self.preset_ms = 0;
        self.value_ms = 0;
        self.time_up = false;
        if self.running {
            self.reference_ms = self.clock.now_ms();
        }
        debug!("stopwatch selected");
    }

    /// Periodic recompute.
    ///
    /// Returns true only on the tick where a countdown first runs out.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let was_up = self.time_up;
        self.latch_time_up();
        !was_up && self.time_up
    }

    /// Live value: elapsed time, or signed remaining time for a countdown.
    #[must_use]
    pub fn current_ms(&self) -> i64 {
        self.live_ms()
    }

    /// Time consumed so far.
    ///
    /// For a countdown this is `preset - remaining` and exceeds the preset
    /// once in overtime.
    #[must_use]
    pub fn used_ms(&self) -> i64 {
        match self.mode {
            TimerMode::Elapsed => self.live_ms(),
            TimerMode::Countdown => self.preset_ms - self.live_ms(),
        }
    }

    /// Current value as a clock face.
    #[must_use]
    pub fn display(&self) -> String {
        format_duration(self.live_ms())
    }

    /// Whether a countdown has reached zero since the last reset.
    #[must_use]
    pub const fn is_time_up(&self) -> bool {
        self.time_up
    }

    /// Whether the timer is counting.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Active mode.
    #[must_use]
    pub const fn mode(&self) -> TimerMode {
        self.mode
    }

    /// Countdown length in milliseconds (zero for a stopwatch).
    #[must_use]
    pub const fn preset_ms(&self) -> i64 {
        self.preset_ms
    }

    /// Selected section, if any.
    #[must_use]
    pub fn current_section(&self) -> Option<&str> {
        self.current_section.as_deref()
    }

    /// Lifecycle state.
    #[must_use]
    pub fn state(&self) -> TimerState {
        if self.running {
            TimerState::Running
        } else if self.used_ms() != 0 {
            TimerState::Paused
        } else {
            TimerState::Idle
        }
    }

    /// Whether `stop` would produce a record right now.
    #[must_use]
    pub fn can_stop(&self) -> bool {
        self.current_section.is_some() && self.used_ms() > 0
    }

    /// Whether `reset` would change anything.
    #[must_use]
    pub fn can_reset(&self) -> bool {
        self.running || self.used_ms() != 0 || self.time_up
    }

    fn live_ms(&self) -> i64 {
        if !self.running {
            return self.value_ms;
        }

        let now = self.clock.now_ms();
        match self.mode {
            TimerMode::Elapsed => (now - self.reference_ms).max(0),
            TimerMode::Countdown => self.snapshot_ms - (now - self.reference_ms).max(0),
        }
    }

    fn latch_time_up(&mut self) {
        if self.mode == TimerMode::Countdown && self.live_ms() <= 0 && !self.time_up {
            self.time_up = true;
            debug!("countdown reached zero");
        }
    }
}
