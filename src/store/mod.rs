//! Pluggable key-value persistence.
//! Records are JSON documents addressed by namespaced string keys, so the
//! tracker never knows which backend it is writing to.

pub mod memory;
pub mod sqlite;

use chrono::NaiveDate;

use crate::errors::AppResult;

/// Key prefix for per-date day records.
pub const DAY_PREFIX: &str = "day:";
/// Key of the currently logged-in user.
pub const USER_KEY: &str = "user:current";
/// Last name used at login, kept across logouts.
pub const LAST_USER_KEY: &str = "settings:last_user";
/// Remote bin id assigned by the mirror service.
pub const REMOTE_BIN_KEY: &str = "settings:remote_bin";

pub fn day_key(date: NaiveDate) -> String {
    format!("{}{}", DAY_PREFIX, date.format("%Y-%m-%d"))
}

pub trait Store {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    fn remove(&mut self, key: &str) -> AppResult<()>;

    /// All keys starting with `prefix`, sorted ascending.
    fn keys(&self, prefix: &str) -> AppResult<Vec<String>>;
}
