use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The local user context. Held while logged in, removed at logout;
/// only the remembered last name survives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub login_date: DateTime<Local>,
}
