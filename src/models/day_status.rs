use serde::{Deserialize, Serialize};

use crate::utils::colors::{CYAN, GREEN, GREY, YELLOW};

/// Aggregated state of one day in the weekly history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayStatus {
    Goal,
    Partial,
    Absence,
    InProgress,
}

impl DayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Goal => "goal",
            DayStatus::Partial => "partial",
            DayStatus::Absence => "absence",
            DayStatus::InProgress => "in-progress",
        }
    }

    /// Label and ANSI color used by the week table.
    pub fn describe(&self) -> (&'static str, &'static str) {
        match self {
            DayStatus::Goal => ("goal met", GREEN),
            DayStatus::Partial => ("partial", YELLOW),
            DayStatus::Absence => ("absence", GREY),
            DayStatus::InProgress => ("in progress", CYAN),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DayStatus::Goal => "✅",
            DayStatus::Partial => "🟡",
            DayStatus::Absence => "▫️",
            DayStatus::InProgress => "⏳",
        }
    }
}
