use serde::Serialize;

use crate::models::day_record::DayRecord;

/// Flat per-session row for CSV export.
#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub date: String,
    pub session_id: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: i64,
    pub status: String,
    pub total_minutes: i64,
    pub goal_met: bool,
    pub workday_closed: bool,
    pub justification: String,
}

/// One row per session. Days without sessions (justified absences)
/// still produce a single row so the justification is not lost.
pub(crate) fn day_to_rows(record: &DayRecord) -> Vec<SessionExport> {
    let base = |record: &DayRecord| SessionExport {
        date: record.date.to_string(),
        session_id: String::new(),
        start_time: String::new(),
        end_time: String::new(),
        duration_minutes: 0,
        status: String::new(),
        total_minutes: record.total_minutes,
        goal_met: record.goal_met,
        workday_closed: record.workday_closed,
        justification: record.justification.clone().unwrap_or_default(),
    };

    if record.sessions.is_empty() {
        return vec![base(record)];
    }

    record
        .sessions
        .iter()
        .map(|s| SessionExport {
            session_id: s.id.clone(),
            start_time: s.start_time.to_rfc3339(),
            end_time: s.end_time.map(|t| t.to_rfc3339()).unwrap_or_default(),
            duration_minutes: s.duration_minutes,
            status: s.status.as_str().to_string(),
            ..base(record)
        })
        .collect()
}
