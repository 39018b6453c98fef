//! Commands a presentation layer can send.

use serde::{Deserialize, Serialize};

/// Which timing option is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetChoice {
    /// Count up, no preset.
    #[default]
    Stopwatch,
    /// Count down from a fixed number of minutes.
    Minutes(u32),
    /// Count down from the custom-minutes field.
    Custom,
}

impl std::fmt::Display for PresetChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stopwatch => write!(f, "Stopwatch"),
            Self::Minutes(m) => write!(f, "{m} min"),
            Self::Custom => write!(f, "Custom"),
        }
    }
}

/// A user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Choose the section being practiced; blank clears it.
    SelectSection(String),
    /// Choose a timing option.
    SelectPreset(PresetChoice),
    /// Edit the custom-minutes field.
    SetCustomMinutes(u32),
    /// Start or resume.
    Start,
    /// Pause.
    Pause,
    /// Reset the clock.
    Reset,
    /// Finish and save the session.
    Stop,
    /// Delete a history row by its displayed position (already confirmed).
    DeleteRecord(usize),
}
