//! JSON export: the same envelope the import command reads back.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::remote::snapshot::{SNAPSHOT_VERSION, Snapshot};

#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope {
    pub export_date: DateTime<Local>,
    pub version: String,
    pub data: Snapshot,
}

pub fn write_json(path: &str, snapshot: Snapshot) -> AppResult<()> {
    let envelope = Envelope {
        export_date: Local::now(),
        version: SNAPSHOT_VERSION.to_string(),
        data: snapshot,
    };

    let json = serde_json::to_string_pretty(&envelope)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn read_envelope(path: &str) -> AppResult<Envelope> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
