//! Absence detection for the day before.

use chrono::NaiveDate;

use crate::models::day_record::DayRecord;
use crate::utils::date::is_weekend;

/// `Some(date)` when `date` still needs a justification: a weekday with
/// no sessions, no minutes and no justification on file.
pub fn pending_absence(date: NaiveDate, record: &DayRecord) -> Option<NaiveDate> {
    if is_weekend(date) {
        return None;
    }
    if record.has_activity() || record.justification.is_some() {
        return None;
    }
    Some(date)
}
