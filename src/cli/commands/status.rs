use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{account, tracker::Tracker};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREY, RESET, YELLOW};
use crate::utils::formatting::{format_minutes, goal_percent, progress_bar};
use crate::utils::table::Table;

use super::{open_store, resolve_clock};

/// Today's sessions, running total and goal progress.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { date } = cmd {
        let mut store = open_store(cfg)?;
        let user = account::require_user(&store)?;
        let clock = resolve_clock(date, &None)?;

        let tracker = Tracker::new(&mut store, clock.as_ref(), cfg.daily_goal_minutes);
        let now = tracker.now();
        let record = tracker.day_record(tracker.today())?;

        header(format!("{} — {}", user.name, record.date));

        if record.sessions.is_empty() {
            println!("{GREY}No sessions yet today{RESET}");
        } else {
            let mut table = Table::new([("start", 8), ("end", 8), ("minutes", 8), ("status", 10)]);
            for s in &record.sessions {
                // Active sessions show their live elapsed time; it is
                // derived on demand and never persisted.
                let minutes = if s.is_active() {
                    s.elapsed_minutes(now)
                } else {
                    s.duration_minutes
                };
                table.add_row(vec![
                    s.start_str(),
                    s.end_str(),
                    minutes.to_string(),
                    s.status.as_str().to_string(),
                ]);
            }
            print!("{}", table.render());
        }

        let active_minutes = record
            .active_session()
            .map(|s| s.elapsed_minutes(now))
            .unwrap_or(0);
        let displayed = record.total_minutes + active_minutes;
        let pct = goal_percent(displayed, cfg.daily_goal_minutes);

        println!();
        println!(
            "{CYAN}Total:{RESET} {} of {}  {} {}%",
            format_minutes(displayed),
            format_minutes(cfg.daily_goal_minutes),
            progress_bar(pct, 20),
            pct
        );

        if record.workday_closed {
            println!("{YELLOW}Workday closed{RESET}");
        }
        if let Some(text) = &record.justification {
            println!("{GREY}Justified: {text}{RESET}");
        }
    }
    Ok(())
}
