use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{account, tracker::Tracker};
use crate::errors::AppResult;
use crate::remote::sync::mirror_best_effort;
use crate::ui::messages::{info, success};
use crate::utils::formatting::format_minutes;

use super::{open_store, resolve_clock};

/// Clock in: open a new session for today.
pub fn handle_in(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::In { at, date } = cmd {
        let mut store = open_store(cfg)?;
        let user = account::require_user(&store)?;
        let clock = resolve_clock(date, at)?;

        let session = {
            let mut tracker = Tracker::new(&mut store, clock.as_ref(), cfg.daily_goal_minutes);
            tracker.clock_in()?
        };

        store.log("IN", &user.name, &format!("session {} started", session.id))?;
        success(format!("Clocked in at {}", session.start_str()));
        mirror_best_effort(&store, cfg);
    }
    Ok(())
}

/// Clock out: complete today's active session.
pub fn handle_out(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Out { at, date } = cmd {
        let mut store = open_store(cfg)?;
        let user = account::require_user(&store)?;
        let clock = resolve_clock(date, at)?;

        let (completed, total) = {
            let mut tracker = Tracker::new(&mut store, clock.as_ref(), cfg.daily_goal_minutes);
            let completed = tracker.clock_out()?;
            let total = tracker.day_record(tracker.today())?.total_minutes;
            (completed, total)
        };

        match completed {
            Some(session) => {
                store.log("OUT", &user.name, &format!("session {} completed", session.id))?;
                success(format!(
                    "Clocked out at {} ({} this session, {} today)",
                    session.end_str(),
                    format_minutes(session.duration_minutes),
                    format_minutes(total)
                ));
                mirror_best_effort(&store, cfg);
            }
            None => info("No active session to clock out"),
        }
    }
    Ok(())
}
