pub mod clock;
pub mod close;
pub mod config;
pub mod db;
pub mod export;
pub mod import;
pub mod init;
pub mod justify;
pub mod log;
pub mod login;
pub mod status;
pub mod sync;
pub mod week;

use chrono::{Local, NaiveDate};

use crate::config::Config;
use crate::core::clock::{Clock, FixedClock, SystemClock};
use crate::errors::{AppError, AppResult};
use crate::store::sqlite::SqliteStore;
use crate::utils::date::parse_date;
use crate::utils::time::parse_optional_time;

/// Open the durable store configured for this invocation.
pub(crate) fn open_store(cfg: &Config) -> AppResult<SqliteStore> {
    SqliteStore::open(&cfg.database)
}

/// Clock for a command, honoring `--date`/`--at` overrides.
pub(crate) fn resolve_clock(
    date: &Option<String>,
    at: &Option<String>,
) -> AppResult<Box<dyn Clock>> {
    if date.is_none() && at.is_none() {
        return Ok(Box::new(SystemClock));
    }

    let now = Local::now();

    let d: NaiveDate = match date {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
        None => now.date_naive(),
    };
    let t = parse_optional_time(at.as_ref())?.unwrap_or_else(|| now.time());

    let instant = d
        .and_time(t)
        .and_local_timezone(Local)
        .earliest()
        .ok_or_else(|| AppError::InvalidTime(format!("{d} {t}")))?;

    Ok(Box::new(FixedClock(instant)))
}
