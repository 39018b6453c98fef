//! In-memory record store.

use super::RecordStore;
use crate::error::PracticeError;
use crate::features::history::SessionRecord;

/// Keeps records in a `Vec`; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<SessionRecord>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `records`.
    #[must_use]
    pub const fn with_records(records: Vec<SessionRecord>) -> Self {
        Self { records }
    }

    /// What was last saved.
    #[must_use]
    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Result<Vec<SessionRecord>, PracticeError> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[SessionRecord]) -> Result<(), PracticeError> {
        self.records = records.to_vec();
        Ok(())
    }
}
