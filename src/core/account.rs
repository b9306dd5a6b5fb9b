//! Login / logout and the remember-last-name convenience record.

use crate::errors::{AppError, AppResult};
use crate::models::user::User;
use crate::store::{LAST_USER_KEY, Store, USER_KEY};

use super::clock::Clock;

pub fn login(store: &mut dyn Store, clock: &dyn Clock, name: &str) -> AppResult<User> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("user name must not be empty".to_string()));
    }

    let user = User {
        name: name.to_string(),
        login_date: clock.now(),
    };

    store.set(USER_KEY, &serde_json::to_string(&user)?)?;
    store.set(LAST_USER_KEY, name)?;

    Ok(user)
}

/// Remove the current user; the remembered name stays behind.
pub fn logout(store: &mut dyn Store) -> AppResult<Option<User>> {
    let user = current_user(store)?;
    store.remove(USER_KEY)?;
    Ok(user)
}

pub fn current_user(store: &dyn Store) -> AppResult<Option<User>> {
    match store.get(USER_KEY)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Name used at the previous login, surviving logout.
pub fn last_user(store: &dyn Store) -> AppResult<Option<String>> {
    store.get(LAST_USER_KEY)
}

/// Logged-in user, or the error every punch command reports.
pub fn require_user(store: &dyn Store) -> AppResult<User> {
    current_user(store)?.ok_or(AppError::NotLoggedIn)
}
