use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::json::read_envelope;
use crate::remote::snapshot;
use crate::ui::messages::success;

use super::open_store;

/// Merge a JSON export file into the local store.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut store = open_store(cfg)?;
        let envelope = read_envelope(file)?;

        let local = snapshot::build_snapshot(&store, cfg)?;
        let merged = snapshot::merge(local, envelope.data);
        let days = snapshot::apply_snapshot(&mut store, &merged, cfg.daily_goal_minutes)?;

        store.log("IMPORT", file, &format!("{days} day(s) merged"))?;
        success(format!("Imported {days} day(s) from {file}"));
    }
    Ok(())
}
