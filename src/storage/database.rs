//! `SQLite` database connection and the `SQLite` record store.

use rusqlite::{params, Connection};
use tracing::{info, warn};

use super::{migrations, RecordStore};
use crate::core::parse_timestamp;
use crate::error::PracticeError;
use crate::features::history::SessionRecord;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at a specific path.
    ///
    /// Creates the database file and runs migrations if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &std::path::Path) -> Result<Self, PracticeError> {
        let conn = Connection::open(path).map_err(|e| {
            PracticeError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;

        let db = Self { conn };
        db.migrate()?;

        Ok(db)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, PracticeError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            PracticeError::Database(format!("Failed to open in-memory database: {e}"))
        })?;

        let db = Self { conn };
        db.migrate()?;

        Ok(db)
    }

    fn migrate(&self) -> Result<(), PracticeError> {
        migrations::run(&self.conn)
    }

    /// Get the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, PracticeError> {
        migrations::get_version(&self.conn)
    }
}

/// Records stored in the `session_records` table.
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    /// Create a store over an open database.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Open (and migrate) the database at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open_at(path: &std::path::Path) -> Result<Self, PracticeError> {
        Database::open_at(path).map(Self::with_database)
    }
}

impl RecordStore for SqliteStore {
    fn load(&self) -> Result<Vec<SessionRecord>, PracticeError> {
        let mut stmt = self
            .db
            .conn
            .prepare(
                r"SELECT position, section, duration_ms, timestamp
                  FROM session_records
                  ORDER BY position",
            )
            .map_err(|e| PracticeError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })
            .map_err(|e| PracticeError::Database(format!("Failed to query records: {e}")))?;

        let mut records = Vec::new();
        for row in rows {
            let (position, section, duration_ms, raw_timestamp) =
                row.map_err(|e| PracticeError::Database(e.to_string()))?;

            let Some(timestamp) = parse_timestamp(&raw_timestamp) else {
                warn!(position, timestamp = %raw_timestamp, "skipping record with unreadable timestamp");
                continue;
            };

            records.push(SessionRecord::new(
                section,
                u64::try_from(duration_ms).unwrap_or_default(),
                timestamp,
            ));
        }

        Ok(records)
    }

    fn save(&mut self, records: &[SessionRecord]) -> Result<(), PracticeError> {
        let tx = self
            .db
            .conn
            .transaction()
            .map_err(|e| PracticeError::Database(format!("Failed to begin transaction: {e}")))?;

        tx.execute("DELETE FROM session_records", [])
            .map_err(|e| PracticeError::Database(format!("Failed to clear records: {e}")))?;

        {
            let mut insert = tx
                .prepare(
                    r"INSERT INTO session_records (position, section, duration_ms, timestamp)
                      VALUES (?1, ?2, ?3, ?4)",
                )
                .map_err(|e| PracticeError::Database(format!("Failed to prepare insert: {e}")))?;

            for (position, record) in records.iter().enumerate() {
                insert
                    .execute(params![
                        i64::try_from(position).unwrap_or(i64::MAX),
                        record.section,
                        i64::try_from(record.duration_ms).unwrap_or(i64::MAX),
                        record.timestamp.to_rfc3339(),
                    ])
                    .map_err(|e| {
                        PracticeError::Database(format!("Failed to insert record: {e}"))
                    })?;
            }
        }

        tx.commit()
            .map_err(|e| PracticeError::Database(format!("Failed to commit records: {e}")))?;

        info!(count = records.len(), "history saved to database");
        Ok(())
    }
}
