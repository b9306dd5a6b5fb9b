//! Session lifecycle and day aggregation.

use chrono::{DateTime, Local, NaiveDate};

use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::history::WeeklyHistoryItem;
use crate::models::session::WorkSession;
use crate::store::{Store, day_key};
use crate::utils::date::week_dates;

use super::absence;
use super::clock::Clock;
use super::history;

/// Explicit context object for all time-tracking operations.
/// Owns nothing: persistence and clock are injected by the caller.
pub struct Tracker<'a> {
    store: &'a mut dyn Store,
    clock: &'a dyn Clock,
    goal_minutes: i64,
}

impl<'a> Tracker<'a> {
    pub fn new(store: &'a mut dyn Store, clock: &'a dyn Clock, goal_minutes: i64) -> Self {
        Self {
            store,
            clock,
            goal_minutes,
        }
    }

    pub fn goal_minutes(&self) -> i64 {
        self.goal_minutes
    }

    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }

    /// Stored record for `date`, or the default empty state.
    /// Absence of data is a valid state, not an error.
    pub fn day_record(&self, date: NaiveDate) -> AppResult<DayRecord> {
        match self.store.get(&day_key(date))? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(DayRecord::empty(date)),
        }
    }

    fn save_record(&mut self, record: &DayRecord) -> AppResult<()> {
        let json = serde_json::to_string(record)?;
        self.store.set(&day_key(record.date), &json)
    }

    /// Open a new session for today. At most one session may be active.
    pub fn clock_in(&mut self) -> AppResult<WorkSession> {
        let now = self.clock.now();
        let mut record = self.day_record(now.date_naive())?;

        if record.active_session().is_some() {
            return Err(AppError::AlreadyClockedIn(record.date.to_string()));
        }

        let session = WorkSession::begin(now);
        record.sessions.push(session.clone());
        self.save_record(&record)?;

        Ok(session)
    }

    /// Complete today's active session, if any.
    /// Returns `None` when nothing is active; a benign condition, not an
    /// error. Durations are clamped to zero if the clock runs backwards.
    pub fn clock_out(&mut self) -> AppResult<Option<WorkSession>> {
        let now = self.clock.now();
        let mut record = self.day_record(now.date_naive())?;

        let Some(session) = record.active_session_mut() else {
            return Ok(None);
        };

        session.complete(now);
        let completed = session.clone();

        record.recompute(self.goal_minutes);
        self.save_record(&record)?;

        Ok(Some(completed))
    }

    /// Close today's workday. Any active session is clocked out first, so
    /// nothing is left dangling. Calling again on a closed day is a no-op
    /// apart from re-marking it closed.
    pub fn end_workday(&mut self) -> AppResult<DayRecord> {
        self.clock_out()?;

        let mut record = self.day_record(self.today())?;
        record.workday_closed = true;
        self.save_record(&record)?;

        Ok(record)
    }

    /// Attach a free-text justification to `date`.
    /// Replaces the whole record: a justified day carries no sessions.
    pub fn submit_justification(&mut self, date: NaiveDate, text: &str) -> AppResult<DayRecord> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::Validation(
                "justification text must not be empty".to_string(),
            ));
        }

        let mut record = DayRecord::empty(date);
        record.workday_closed = true;
        record.justification = Some(text.to_string());
        self.save_record(&record)?;

        Ok(record)
    }

    /// Date still waiting for a justification, if any.
    /// Only yesterday is examined, and weekends never count.
    pub fn check_for_absence(&self) -> AppResult<Option<NaiveDate>> {
        let Some(yesterday) = self.today().pred_opt() else {
            return Ok(None);
        };
        let record = self.day_record(yesterday)?;
        Ok(absence::pending_absence(yesterday, &record))
    }

    /// The trailing 7 days ending today, oldest first.
    pub fn weekly_history(&self) -> AppResult<Vec<WeeklyHistoryItem>> {
        let today = self.today();
        let mut items = Vec::with_capacity(7);

        for date in week_dates(today) {
            let record = self.day_record(date)?;
            items.push(history::history_item(&record, date == today));
        }

        Ok(items)
    }
}
