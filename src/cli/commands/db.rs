use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::stats::print_db_info;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

use super::open_store;

/// Database maintenance: integrity check, vacuum, info.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info,
    } = cmd
    {
        let store = open_store(cfg)?;

        if *check {
            let result: String =
                store
                    .pool
                    .conn
                    .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
            if result == "ok" {
                success("Database integrity OK");
            } else {
                warning(format!("Integrity check reported: {result}"));
            }
        }

        if *vacuum {
            store.pool.conn.execute_batch("VACUUM")?;
            success("Database vacuumed");
        }

        if *info {
            print_db_info(&store.pool, &cfg.database)?;
        }
    }
    Ok(())
}
