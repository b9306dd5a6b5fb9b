//! Schema migrations for the records database.

use rusqlite::Connection;

use crate::errors::{AppError, AppResult};

const SCHEMA_VERSION: i32 = 1;

/// Ensure the `records` table exists: one row per stored document,
/// addressed by its namespaced key.
fn ensure_records_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS records (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_records_updated ON records(updated_at);
        "#,
    )
}

/// Ensure the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    ensure_records_table(conn).map_err(|e| AppError::Migration(e.to_string()))?;
    ensure_log_table(conn).map_err(|e| AppError::Migration(e.to_string()))?;

    if version < SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)
            .map_err(|e| AppError::Migration(e.to_string()))?;
    }

    Ok(())
}
