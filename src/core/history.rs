//! Weekly history derivation and streak counting.

use crate::models::day_record::DayRecord;
use crate::models::day_status::DayStatus;
use crate::models::history::WeeklyHistoryItem;

/// Derive the history row for one day.
/// Today stays `in-progress` until the workday is closed; after that a
/// day settles into goal / partial / absence by its totals.
pub fn history_item(record: &DayRecord, is_today: bool) -> WeeklyHistoryItem {
    let status = if is_today && !record.workday_closed {
        DayStatus::InProgress
    } else if record.goal_met {
        DayStatus::Goal
    } else if record.total_minutes > 0 {
        DayStatus::Partial
    } else {
        DayStatus::Absence
    };

    WeeklyHistoryItem {
        date: record.date,
        total_minutes: record.total_minutes,
        status,
        justification: record.justification.clone(),
    }
}

/// Consecutive trailing days that met the goal or are still in progress.
/// Returns 0 when the most recent day already breaks the run.
pub fn streak_count(history: &[WeeklyHistoryItem]) -> usize {
    history
        .iter()
        .rev()
        .take_while(|item| matches!(item.status, DayStatus::Goal | DayStatus::InProgress))
        .count()
}
