use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::{account, tracker::Tracker};
use crate::errors::{AppError, AppResult};
use crate::remote::sync::mirror_best_effort;
use crate::ui::messages::success;
use crate::utils::date::parse_date;

use super::open_store;

/// Record a justification for a day with no activity.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Justify { date, text } = cmd {
        let mut store = open_store(cfg)?;
        let user = account::require_user(&store)?;
        let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;

        let clock = SystemClock;
        let record = {
            let mut tracker = Tracker::new(&mut store, &clock, cfg.daily_goal_minutes);
            tracker.submit_justification(d, text)?
        };

        store.log(
            "JUSTIFY",
            &user.name,
            &format!("absence on {} justified", record.date),
        )?;
        success(format!("Absence on {} justified", record.date));
        mirror_best_effort(&store, cfg);
    }
    Ok(())
}
