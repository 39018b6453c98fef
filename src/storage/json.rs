//! JSON file record store.
//!
//! The whole history lives in one file as a JSON array, rewritten on every
//! save.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::RecordStore;
use crate::error::PracticeError;
use crate::features::history::SessionRecord;

/// Records stored as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path`. The file is created on first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Result<Vec<SessionRecord>, PracticeError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(parse_records(&contents, &self.path))
    }

    fn save(&mut self, records: &[SessionRecord]) -> Result<(), PracticeError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(records)?;
        let temp = self.temp_path();
        std::fs::write(&temp, contents).map_err(|e| {
            PracticeError::Storage(format!("Failed to write {}: {e}", temp.display()))
        })?;
        std::fs::rename(&temp, &self.path).map_err(|e| {
            PracticeError::Storage(format!("Failed to replace {}: {e}", self.path.display()))
        })?;

        info!(count = records.len(), path = %self.path.display(), "history saved");
        Ok(())
    }
}

/// Parse file contents, dropping anything that is not a valid record.
fn parse_records(contents: &str, path: &Path) -> Vec<SessionRecord> {
    if contents.trim().is_empty() {
        return Vec::new();
    }

    let values: Vec<serde_json::Value> = match serde_json::from_str::<Option<_>>(contents) {
        Ok(values) => values.unwrap_or_default(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "history file is corrupt, starting empty");
            return Vec::new();
        }
    };

    values
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(path = %path.display(), index = i, error = %e, "skipping malformed record");
                None
            }
        })
        .collect()
}
