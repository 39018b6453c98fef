//! Path resolution for practimer configuration and data files.
//!
//! All practimer data is stored in one home directory, `~/.practimer/` by
//! default:
//! - `config.yaml` - Main configuration file
//! - `history.json` - Session history (JSON backend)
//! - `practimer.db` - Session history (`SQLite` backend)
//! - `practimer.log` - Log output

use std::path::PathBuf;

use crate::error::PracticeError;

/// Paths to practimer configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.practimer/`
    pub root: PathBuf,
    /// Config file: `~/.practimer/config.yaml`
    pub config_file: PathBuf,
    /// JSON history: `~/.practimer/history.json`
    pub history_file: PathBuf,
    /// Database file: `~/.practimer/practimer.db`
    pub database: PathBuf,
    /// Log file: `~/.practimer/practimer.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PracticeError> {
        let home = std::env::var("HOME").map_err(|_| {
            PracticeError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".practimer")))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            history_file: root.join("history.json"),
            database: root.join("practimer.db"),
            log_file: root.join("practimer.log"),
            root,
        }
    }

    /// Use `root` when given, the home directory otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if no root is given and the home directory cannot be
    /// determined.
    pub fn resolve(root: Option<PathBuf>) -> Result<Self, PracticeError> {
        root.map_or_else(Self::new, |root| Ok(Self::with_root(root)))
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), PracticeError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                PracticeError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-practimer");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.history_file, root.join("history.json"));
        assert_eq!(paths.database, root.join("practimer.db"));
        assert_eq!(paths.log_file, root.join("practimer.log"));
    }

    #[test]
    fn test_resolve_prefers_explicit_root() {
        let root = PathBuf::from("/tmp/elsewhere");
        let paths = Paths::resolve(Some(root.clone())).unwrap();
        assert_eq!(paths.root, root);
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested"));

        paths.ensure_dirs().unwrap();
        assert!(paths.root.exists());
    }
}
