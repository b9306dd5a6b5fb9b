use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::session::WorkSession;

/// The set of sessions for one calendar date, plus its aggregates.
/// One record per date, keyed by the date; history is append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub sessions: Vec<WorkSession>,
    pub total_minutes: i64,
    pub goal_met: bool,
    pub workday_closed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

impl DayRecord {
    /// Default state for a date with no stored data yet.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            sessions: Vec::new(),
            total_minutes: 0,
            goal_met: false,
            workday_closed: false,
            justification: None,
        }
    }

    pub fn active_session(&self) -> Option<&WorkSession> {
        self.sessions.iter().find(|s| s.is_active())
    }

    pub fn active_session_mut(&mut self) -> Option<&mut WorkSession> {
        self.sessions.iter_mut().find(|s| s.is_active())
    }

    pub fn has_activity(&self) -> bool {
        !self.sessions.is_empty() || self.total_minutes > 0
    }

    /// Re-derive `total_minutes` and `goal_met` from completed sessions.
    /// The active session, if any, contributes nothing until clock-out.
    pub fn recompute(&mut self, goal_minutes: i64) {
        self.total_minutes = self
            .sessions
            .iter()
            .filter(|s| !s.is_active())
            .map(|s| s.duration_minutes)
            .sum();
        self.goal_met = self.total_minutes >= goal_minutes;
    }
}
