use chrono::NaiveDate;
use serde::Serialize;

use super::day_status::DayStatus;

/// One derived row of the trailing-week view.
/// Plain data handed to the presentation layer, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyHistoryItem {
    pub date: NaiveDate,
    pub total_minutes: i64,
    pub status: DayStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}
