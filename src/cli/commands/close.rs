use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{account, tracker::Tracker};
use crate::errors::AppResult;
use crate::remote::sync::mirror_best_effort;
use crate::ui::messages::success;
use crate::utils::formatting::format_minutes;

use super::{open_store, resolve_clock};

/// Close the workday, clocking out any active session first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Close { at, date } = cmd {
        let mut store = open_store(cfg)?;
        let user = account::require_user(&store)?;
        let clock = resolve_clock(date, at)?;

        let record = {
            let mut tracker = Tracker::new(&mut store, clock.as_ref(), cfg.daily_goal_minutes);
            tracker.end_workday()?
        };

        store.log("CLOSE", &user.name, &format!("workday {} closed", record.date))?;

        let goal = if record.goal_met {
            "goal met 🎉"
        } else {
            "goal not met"
        };
        success(format!(
            "Workday {} closed: {} worked, {}",
            record.date,
            format_minutes(record.total_minutes),
            goal
        ));
        mirror_best_effort(&store, cfg);
    }
    Ok(())
}
