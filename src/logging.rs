//! Logging setup.
//!
//! Logs always go to `practimer.log` in the data directory so the TUI
//! screen stays clean; `--verbose` mirrors them to stderr. The filter comes
//! from `PRACTIMER_LOG` (same syntax as `RUST_LOG`), defaulting to `info`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Paths;
use crate::error::PracticeError;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PRACTIMER_LOG";

/// Build the log filter from [`LOG_ENV`], falling back to `info`.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(paths: &Paths, verbose: bool) -> Result<(), PracticeError> {
    paths.ensure_dirs()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&paths.log_file)?;

    let file_layer = fmt::layer().with_ansi(false).with_writer(Mutex::new(file));
    let stderr_layer = verbose.then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| PracticeError::Config(format!("Failed to initialize logging: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("logs"));

        init(&paths, false).unwrap();
        tracing::info!("logging ready");

        assert!(paths.log_file.exists());
        // A second subscriber is refused
        assert!(init(&paths, false).is_err());
    }
}
