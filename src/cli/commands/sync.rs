use crate::config::Config;
use crate::errors::AppResult;
use crate::remote::sync;

use super::open_store;

/// Explicit two-way synchronization with the remote mirror.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg)?;
    sync::run(&mut store, cfg)?;
    store.log("SYNC", "", "sync completed")?;
    Ok(())
}
