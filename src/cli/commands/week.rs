use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{account, history, tracker::Tracker};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::RESET;
use crate::utils::date::weekday_short;
use crate::utils::formatting::format_minutes;

use super::{open_store, resolve_clock};

/// Trailing-week table plus the current streak.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { date } = cmd {
        let mut store = open_store(cfg)?;
        let user = account::require_user(&store)?;
        let clock = resolve_clock(date, &None)?;

        let tracker = Tracker::new(&mut store, clock.as_ref(), cfg.daily_goal_minutes);
        let items = tracker.weekly_history()?;
        let streak = history::streak_count(&items);

        header(format!("Last 7 days — {}", user.name));

        for item in &items {
            let (label, color) = item.status.describe();
            let weekday = if cfg.show_weekday {
                format!("{} ", weekday_short(item.date))
            } else {
                String::new()
            };
            let just = item
                .justification
                .as_deref()
                .map(|t| format!("  ({t})"))
                .unwrap_or_default();

            println!(
                "{} {}{}  {:>7}  {}{:<12}{}{}",
                item.status.icon(),
                weekday,
                item.date,
                format_minutes(item.total_minutes),
                color,
                label,
                RESET,
                just
            );
        }

        println!();
        println!("🔥 Streak: {streak} day(s)");
    }
    Ok(())
}
