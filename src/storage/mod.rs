//! Storage layer for practimer.
//!
//! Completed session records are kept as one ordered collection. The
//! [`RecordStore`] trait is the only thing history code sees, so the
//! backing technology can be swapped freely:
//! - [`JsonFileStore`]: a single JSON array on disk (default)
//! - [`SqliteStore`]: a `SQLite` table
//! - [`MemoryStore`]: nothing persisted

mod database;
mod json;
mod memory;
mod migrations;

pub use database::{Database, SqliteStore};
pub use json::JsonFileStore;
pub use memory::MemoryStore;

use crate::config::{Paths, StorageBackend};
use crate::error::PracticeError;
use crate::features::history::SessionRecord;

/// Persistence contract for the record list.
#[cfg_attr(test, mockall::automock)]
pub trait RecordStore {
    /// Load every record in insertion order.
    ///
    /// Missing or unreadable data yields an empty list rather than an error;
    /// errors are reserved for the backend itself failing.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached at all.
    fn load(&self) -> Result<Vec<SessionRecord>, PracticeError>;

    /// Replace the whole stored collection with `records`.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be written.
    fn save(&mut self, records: &[SessionRecord]) -> Result<(), PracticeError>;
}

impl<S: RecordStore + ?Sized> RecordStore for Box<S> {
    fn load(&self) -> Result<Vec<SessionRecord>, PracticeError> {
        (**self).load()
    }

    fn save(&mut self, records: &[SessionRecord]) -> Result<(), PracticeError> {
        (**self).save(records)
    }
}

/// Open the configured backend under `paths`.
///
/// # Errors
///
/// Returns an error if the data directory or database cannot be created.
pub fn open_store(
    backend: StorageBackend,
    paths: &Paths,
) -> Result<Box<dyn RecordStore>, PracticeError> {
    paths.ensure_dirs()?;
    Ok(match backend {
        StorageBackend::Json => Box::new(JsonFileStore::new(&paths.history_file)),
        StorageBackend::Sqlite => Box::new(SqliteStore::open_at(&paths.database)?),
    })
}
