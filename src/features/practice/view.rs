//! What a presentation layer renders.

use serde::Serialize;

use super::PresetChoice;
use crate::features::history::HistoryRow;
use crate::features::stats::StatsSnapshot;
use crate::features::timer::{TimerMode, TimerState};

/// Which controls are usable right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ButtonState {
    /// Start/resume.
    pub start: bool,
    /// Pause.
    pub pause: bool,
    /// Reset.
    pub reset: bool,
    /// Stop and save.
    pub stop: bool,
}

/// Snapshot of everything on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    /// Clock face, `-` prefixed in overtime.
    pub display: String,
    /// Timer mode.
    pub mode: TimerMode,
    /// Timer lifecycle state.
    pub state: TimerState,
    /// Selected timing option.
    pub preset: PresetChoice,
    /// Value of the custom-minutes field.
    pub custom_minutes: u32,
    /// Selected section, if any.
    pub section: Option<String>,
    /// Usable controls.
    pub buttons: ButtonState,
    /// Aggregate statistics.
    pub stats: StatsSnapshot,
    /// History, newest first.
    pub history: Vec<HistoryRow>,
    /// Countdown has run out.
    pub time_up: bool,
    /// Last message for the user.
    pub notice: Option<String>,
}
