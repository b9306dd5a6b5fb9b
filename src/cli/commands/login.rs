use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{account, tracker::Tracker};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use super::{open_store, resolve_clock};

/// Log in, remember the name, and check for a pending absence.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { name, date } = cmd {
        let mut store = open_store(cfg)?;
        let clock = resolve_clock(date, &None)?;

        let name = match name {
            Some(n) => n.clone(),
            None => account::last_user(&store)?.ok_or_else(|| {
                AppError::Validation("no user name given and none remembered".to_string())
            })?,
        };

        let user = account::login(&mut store, clock.as_ref(), &name)?;
        store.log("LOGIN", &user.name, "user logged in")?;
        success(format!("Welcome, {}!", user.name));

        let tracker = Tracker::new(&mut store, clock.as_ref(), cfg.daily_goal_minutes);
        match tracker.check_for_absence()? {
            Some(pending) => warning(format!(
                "No activity recorded for {pending}. Run `punchlog justify {pending} \"<reason>\"`"
            )),
            None => info("No pending absences"),
        }
    }
    Ok(())
}

/// Log out and forget the current user (the remembered name survives).
pub fn handle_logout(cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg)?;

    match account::logout(&mut store)? {
        Some(user) => {
            store.log("LOGOUT", &user.name, "user logged out")?;
            success(format!("Goodbye, {}!", user.name));
        }
        None => info("No user is logged in"),
    }
    Ok(())
}
