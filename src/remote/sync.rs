//! Explicit synchronization with the remote mirror.
//! Replication is best-effort: every remote failure is reported as a
//! warning and swallowed. Local state is already durable by the time any
//! request is made.

use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{REMOTE_BIN_KEY, Store};
use crate::ui::messages::{info, success, warning};

use super::client::BinClient;
use super::snapshot;

/// Full two-way sync: merge the local snapshot with the remote one and
/// store the result on both sides.
pub fn run(store: &mut dyn Store, cfg: &Config) -> AppResult<()> {
    let Some(base_url) = &cfg.remote_base_url else {
        info("No remote mirror configured (set `remote_base_url` in the config file)");
        return Ok(());
    };

    let client = BinClient::new(base_url);
    let local = snapshot::build_snapshot(store, cfg)?;

    let Some(bin_id) = store.get(REMOTE_BIN_KEY)? else {
        // First sync: create the bin and remember its id.
        match client.create(&local) {
            Ok(id) => {
                store.set(REMOTE_BIN_KEY, &id)?;
                success(format!("Remote mirror created (bin {id})"));
            }
            Err(e) => warning(format!("Remote mirror unavailable: {e}")),
        }
        return Ok(());
    };

    let remote = match client.fetch_latest(&bin_id) {
        Ok(snap) => snap,
        Err(e) => {
            warning(format!("Could not fetch remote snapshot: {e}"));
            return Ok(());
        }
    };

    let merged = snapshot::merge(local, remote);
    let days = snapshot::apply_snapshot(store, &merged, cfg.daily_goal_minutes)?;

    match client.replace(&bin_id, &merged) {
        Ok(()) => success(format!("Synchronized {days} day(s) with the remote mirror")),
        Err(e) => warning(format!("Local merge done, remote update failed: {e}")),
    }

    Ok(())
}

/// Best-effort push after a local mutation. Does nothing unless a remote
/// is configured and a bin already exists; never returns an error.
pub fn mirror_best_effort(store: &dyn Store, cfg: &Config) {
    let Some(base_url) = &cfg.remote_base_url else {
        return;
    };
    let Ok(Some(bin_id)) = store.get(REMOTE_BIN_KEY) else {
        return;
    };
    let Ok(snap) = snapshot::build_snapshot(store, cfg) else {
        return;
    };

    if let Err(e) = BinClient::new(base_url).replace(&bin_id, &snap) {
        warning(format!("Remote mirror not updated: {e}"));
    }
}
