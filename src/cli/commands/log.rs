use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::read_log;
use crate::errors::AppResult;
use crate::ui::messages::info;

use super::open_store;

/// Print the internal operation log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            info("Nothing to do (use --print)");
            return Ok(());
        }

        let store = open_store(cfg)?;
        let rows = read_log(&store.pool.conn)?;

        if rows.is_empty() {
            info("Log is empty");
            return Ok(());
        }

        for (date, operation, target, message) in rows {
            println!("{date}  {operation:<8} {target:<12} {message}");
        }
    }
    Ok(())
}
