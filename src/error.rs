//! Error types for practimer.

use thiserror::Error;

/// Mistakes the user can make while driving the timer.
///
/// These are surfaced as a blocking notice and never change timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UserInputError {
    /// `start` was requested before a section was chosen.
    #[error("Please select a section first")]
    NoSectionSelected,
    /// `stop` was requested with no section or no usable time.
    #[error("No valid practice time to save")]
    NoValidRecord,
}

/// Errors that can occur in practimer.
#[derive(Debug, Error)]
pub enum PracticeError {
    /// Invalid user command for the current timer state.
    #[error(transparent)]
    UserInput(#[from] UserInputError),

    /// A history index that does not exist.
    #[error("No history record at position {index} (have {len})")]
    InvalidIndex {
        /// Requested display index.
        index: usize,
        /// Number of records.
        len: usize,
    },

    /// Record store failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// `SQLite` failure.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Parse failure.
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PracticeError {
    /// Whether this error is a user mistake rather than a system failure.
    #[must_use]
    pub const fn is_user_input(&self) -> bool {
        matches!(self, Self::UserInput(_) | Self::InvalidIndex { .. })
    }
}

impl From<serde_json::Error> for PracticeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<serde_yaml::Error> for PracticeError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<rusqlite::Error> for PracticeError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_input_messages() {
        let err: PracticeError = UserInputError::NoSectionSelected.into();
        assert_eq!(err.to_string(), "Please select a section first");
        assert!(err.is_user_input());
    }

    #[test]
    fn test_invalid_index_message() {
        let err = PracticeError::InvalidIndex { index: 4, len: 2 };
        assert_eq!(err.to_string(), "No history record at position 4 (have 2)");
        assert!(err.is_user_input());
    }

    #[test]
    fn test_io_is_not_user_input() {
        let err: PracticeError = std::io::Error::other("disk full").into();
        assert!(!err.is_user_input());
    }
}
