pub mod log;
pub mod migrate;
pub mod pool;
pub mod stats;

use rusqlite::Connection;

use crate::errors::AppResult;

/// Initialize the database.
/// All schema creation / upgrades live in the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    migrate::run_pending_migrations(conn)
}
