//! Database migrations for practimer.
//!
//! Each migration is a function that upgrades the schema by one version.
//! Migrations are run automatically when the database is opened.

use rusqlite::Connection;

use crate::error::PracticeError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, PracticeError> {
    let version: i32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| PracticeError::Database(format!("Failed to get schema version: {e}")))?;

    Ok(version)
}

/// Set the schema version in the database.
fn set_version(conn: &Connection, version: i32) -> Result<(), PracticeError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| PracticeError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), PracticeError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

/// Run a specific migration.
fn run_migration(conn: &Connection, version: i32) -> Result<(), PracticeError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(PracticeError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: session records, kept in insertion order by `position`.
fn migrate_v1(conn: &Connection) -> Result<(), PracticeError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS session_records (
            position INTEGER PRIMARY KEY,
            section TEXT NOT NULL,
            duration_ms INTEGER NOT NULL CHECK (duration_ms >= 0),
            timestamp TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_session_records_timestamp
        ON session_records(timestamp);
        ",
    )
    .map_err(|e| PracticeError::Database(format!("Migration v1 failed: {e}")))
}
