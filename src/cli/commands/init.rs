use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::sqlite::SqliteStore;
use crate::ui::messages::success;

/// Create the configuration file and an empty, migrated database.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;
    SqliteStore::open(&cfg.database)?;

    success(format!("Initialized database at {}", cfg.database));
    Ok(())
}
