use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Completed,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Active => "active",
            SessionStatus::Completed => "completed",
        }
    }
}

/// One contiguous clocked-in interval.
/// Created by clock-in; `end_time` and `duration_minutes` are fixed at
/// clock-out and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSession {
    pub id: String,
    pub start_time: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Local>>,
    #[serde(default)]
    pub duration_minutes: i64,
    pub status: SessionStatus,
}

impl WorkSession {
    /// Open a new active session starting at `now`.
    pub fn begin(now: DateTime<Local>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            start_time: now,
            end_time: None,
            duration_minutes: 0,
            status: SessionStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    /// Whole minutes since clock-in, never negative. Always derived from
    /// the stored instant, never from a running counter.
    pub fn elapsed_minutes(&self, now: DateTime<Local>) -> i64 {
        (now - self.start_time).num_minutes().max(0)
    }

    /// Close the session at `now`, fixing end time and duration.
    pub fn complete(&mut self, now: DateTime<Local>) {
        self.end_time = Some(now);
        self.duration_minutes = self.elapsed_minutes(now);
        self.status = SessionStatus::Completed;
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string())
    }
}
