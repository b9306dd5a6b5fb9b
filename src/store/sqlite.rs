//! Durable backend over SQLite. One row per document, addressed by key.

use chrono::Local;
use rusqlite::{OptionalExtension, params};

use crate::db::{self, log::write_log, pool::DbPool};
use crate::errors::AppResult;

use super::Store;

pub struct SqliteStore {
    pub pool: DbPool,
}

impl SqliteStore {
    /// Open (and migrate) the records database at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        db::init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    /// Append to the internal operation log. Not part of the `Store`
    /// contract; only the durable backend keeps an audit trail.
    pub fn log(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        write_log(&self.pool.conn, operation, target, message)
    }
}

impl Store for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row("SELECT value FROM records WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO records (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM records WHERE key = ?1", [key])?;
        Ok(())
    }

    fn keys(&self, prefix: &str) -> AppResult<Vec<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare("SELECT key FROM records WHERE key LIKE ?1 || '%' ORDER BY key ASC")?;

        let rows = stmt.query_map([prefix], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}
