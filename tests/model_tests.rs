use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};

use punchlog::core::clock::FixedClock;
use punchlog::core::history::streak_count;
use punchlog::core::tracker::Tracker;
use punchlog::errors::AppError;
use punchlog::models::day_record::DayRecord;
use punchlog::models::day_status::DayStatus;
use punchlog::models::history::WeeklyHistoryItem;
use punchlog::store::memory::MemoryStore;

const GOAL: i64 = 180;

fn at(date: &str, time: &str) -> DateTime<Local> {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    let t = NaiveTime::parse_from_str(time, "%H:%M:%S").unwrap();
    Local.from_local_datetime(&d.and_time(t)).unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Clock in and out once on `day`, between the two given times.
fn work(store: &mut MemoryStore, day: &str, start: &str, end: &str) {
    {
        let clock = FixedClock(at(day, start));
        let mut tracker = Tracker::new(&mut *store, &clock, GOAL);
        tracker.clock_in().unwrap();
    }
    let clock = FixedClock(at(day, end));
    let mut tracker = Tracker::new(&mut *store, &clock, GOAL);
    tracker.clock_out().unwrap().unwrap();
}

#[test]
fn session_duration_and_daily_total() {
    let mut store = MemoryStore::new();

    {
        let clock = FixedClock(at("2025-03-10", "09:00:00"));
        let mut tracker = Tracker::new(&mut store, &clock, GOAL);
        let session = tracker.clock_in().unwrap();
        assert!(session.is_active());
        assert!(session.end_time.is_none());
    }

    let clock = FixedClock(at("2025-03-10", "10:30:00"));
    let mut tracker = Tracker::new(&mut store, &clock, GOAL);
    let session = tracker.clock_out().unwrap().unwrap();

    assert_eq!(session.duration_minutes, 90);
    assert!(session.end_time.is_some());

    let record = tracker.day_record(date("2025-03-10")).unwrap();
    assert_eq!(record.total_minutes, 90);
    assert!(!record.goal_met);
}

#[test]
fn two_sessions_sum_past_the_goal() {
    let mut store = MemoryStore::new();

    work(&mut store, "2025-03-10", "08:00:00", "09:40:00"); // 100 min
    work(&mut store, "2025-03-10", "11:00:00", "12:30:00"); // 90 min

    let clock = FixedClock(at("2025-03-10", "13:00:00"));
    let mut tracker = Tracker::new(&mut store, &clock, GOAL);
    let record = tracker.day_record(tracker.today()).unwrap();

    assert_eq!(record.sessions.len(), 2);
    assert_eq!(record.total_minutes, 190);
    assert!(record.goal_met);
}

#[test]
fn clock_in_rejected_while_active() {
    let mut store = MemoryStore::new();
    let clock = FixedClock(at("2025-03-10", "09:00:00"));
    let mut tracker = Tracker::new(&mut store, &clock, GOAL);

    tracker.clock_in().unwrap();
    let err = tracker.clock_in().unwrap_err();

    assert!(matches!(err, AppError::AlreadyClockedIn(_)));

    // The failed call must not have added a second session.
    let record = tracker.day_record(date("2025-03-10")).unwrap();
    assert_eq!(record.sessions.len(), 1);
}

#[test]
fn clock_out_without_active_session_is_benign() {
    let mut store = MemoryStore::new();
    let clock = FixedClock(at("2025-03-10", "09:00:00"));
    let mut tracker = Tracker::new(&mut store, &clock, GOAL);

    assert!(tracker.clock_out().unwrap().is_none());
}

#[test]
fn backwards_clock_clamps_duration_to_zero() {
    let mut store = MemoryStore::new();

    {
        let clock = FixedClock(at("2025-03-10", "10:00:00"));
        let mut tracker = Tracker::new(&mut store, &clock, GOAL);
        tracker.clock_in().unwrap();
    }

    let clock = FixedClock(at("2025-03-10", "09:00:00"));
    let mut tracker = Tracker::new(&mut store, &clock, GOAL);
    let session = tracker.clock_out().unwrap().unwrap();

    assert_eq!(session.duration_minutes, 0);

    let record = tracker.day_record(date("2025-03-10")).unwrap();
    assert_eq!(record.total_minutes, 0);
}

#[test]
fn end_workday_closes_active_session_first() {
    let mut store = MemoryStore::new();

    {
        let clock = FixedClock(at("2025-03-10", "09:00:00"));
        let mut tracker = Tracker::new(&mut store, &clock, GOAL);
        tracker.clock_in().unwrap();
    }

    let clock = FixedClock(at("2025-03-10", "12:00:00"));
    let mut tracker = Tracker::new(&mut store, &clock, GOAL);
    let record = tracker.end_workday().unwrap();

    assert!(record.workday_closed);
    assert!(record.active_session().is_none());
    assert_eq!(record.total_minutes, 180);
    assert!(record.goal_met);
}

#[test]
fn end_workday_is_idempotent() {
    let mut store = MemoryStore::new();

    work(&mut store, "2025-03-10", "09:00:00", "10:00:00");

    let clock = FixedClock(at("2025-03-10", "10:05:00"));
    let first = {
        let mut tracker = Tracker::new(&mut store, &clock, GOAL);
        tracker.end_workday().unwrap()
    };
    let second = {
        let mut tracker = Tracker::new(&mut store, &clock, GOAL);
        tracker.end_workday().unwrap()
    };

    assert_eq!(first, second);
}

#[test]
fn justification_replaces_partial_day() {
    let mut store = MemoryStore::new();

    work(&mut store, "2025-03-07", "09:00:00", "10:00:00");

    let clock = FixedClock(at("2025-03-10", "08:00:00"));
    let mut tracker = Tracker::new(&mut store, &clock, GOAL);
    let record = tracker
        .submit_justification(date("2025-03-07"), "traveled")
        .unwrap();

    assert!(record.sessions.is_empty());
    assert_eq!(record.total_minutes, 0);
    assert!(!record.goal_met);
    assert!(record.workday_closed);
    assert_eq!(record.justification.as_deref(), Some("traveled"));

    // The replacement is persisted, not just returned.
    let reloaded = tracker.day_record(date("2025-03-07")).unwrap();
    assert_eq!(reloaded, record);
}

#[test]
fn blank_justification_is_rejected_without_side_effects() {
    let mut store = MemoryStore::new();
    let clock = FixedClock(at("2025-03-10", "08:00:00"));
    let mut tracker = Tracker::new(&mut store, &clock, GOAL);

    let err = tracker
        .submit_justification(date("2025-03-07"), "   ")
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let record = tracker.day_record(date("2025-03-07")).unwrap();
    assert_eq!(record, DayRecord::empty(date("2025-03-07")));
}

#[test]
fn absence_check_skips_weekends() {
    // 2025-03-10 is a Monday; yesterday is a Sunday.
    let mut store = MemoryStore::new();
    let clock = FixedClock(at("2025-03-10", "08:00:00"));
    let tracker = Tracker::new(&mut store, &clock, GOAL);

    assert_eq!(tracker.check_for_absence().unwrap(), None);
}

#[test]
fn absence_check_reports_an_empty_weekday() {
    // 2025-03-08 is a Saturday; yesterday is Friday 2025-03-07.
    let mut store = MemoryStore::new();
    let clock = FixedClock(at("2025-03-08", "08:00:00"));
    let tracker = Tracker::new(&mut store, &clock, GOAL);

    assert_eq!(tracker.check_for_absence().unwrap(), Some(date("2025-03-07")));
}

#[test]
fn absence_check_accepts_justified_and_worked_days() {
    let mut store = MemoryStore::new();

    {
        let clock = FixedClock(at("2025-03-08", "08:00:00"));
        let mut tracker = Tracker::new(&mut store, &clock, GOAL);
        tracker
            .submit_justification(date("2025-03-07"), "traveled")
            .unwrap();
        assert_eq!(tracker.check_for_absence().unwrap(), None);
    }

    work(&mut store, "2025-03-10", "09:00:00", "09:30:00");
    let clock = FixedClock(at("2025-03-11", "08:00:00"));
    let tracker = Tracker::new(&mut store, &clock, GOAL);
    assert_eq!(tracker.check_for_absence().unwrap(), None);
}

#[test]
fn weekly_history_has_seven_ordered_items() {
    let mut store = MemoryStore::new();

    work(&mut store, "2025-03-06", "08:00:00", "11:20:00"); // 200 min → goal
    work(&mut store, "2025-03-07", "09:00:00", "10:00:00"); // 60 min → partial
    {
        let clock = FixedClock(at("2025-03-09", "08:00:00"));
        let mut tracker = Tracker::new(&mut store, &clock, GOAL);
        tracker
            .submit_justification(date("2025-03-09"), "sick")
            .unwrap();
    }

    let clock = FixedClock(at("2025-03-10", "08:00:00"));
    let tracker = Tracker::new(&mut store, &clock, GOAL);
    let items = tracker.weekly_history().unwrap();

    assert_eq!(items.len(), 7);
    assert_eq!(items.first().unwrap().date, date("2025-03-04"));
    assert_eq!(items.last().unwrap().date, date("2025-03-10"));

    let by_date = |d: &str| items.iter().find(|i| i.date == date(d)).unwrap();

    assert_eq!(by_date("2025-03-06").status, DayStatus::Goal);
    assert_eq!(by_date("2025-03-07").status, DayStatus::Partial);
    assert_eq!(by_date("2025-03-08").status, DayStatus::Absence);
    assert_eq!(by_date("2025-03-09").status, DayStatus::Absence);
    assert_eq!(by_date("2025-03-09").justification.as_deref(), Some("sick"));
    assert_eq!(by_date("2025-03-10").status, DayStatus::InProgress);
}

#[test]
fn closed_today_settles_out_of_in_progress() {
    let mut store = MemoryStore::new();

    work(&mut store, "2025-03-10", "09:00:00", "10:00:00");
    let clock = FixedClock(at("2025-03-10", "10:05:00"));
    let mut tracker = Tracker::new(&mut store, &clock, GOAL);
    tracker.end_workday().unwrap();

    let items = tracker.weekly_history().unwrap();
    assert_eq!(items.last().unwrap().status, DayStatus::Partial);
}

fn item(day: &str, status: DayStatus) -> WeeklyHistoryItem {
    WeeklyHistoryItem {
        date: date(day),
        total_minutes: 0,
        status,
        justification: None,
    }
}

#[test]
fn streak_counts_trailing_goal_days() {
    let history = vec![
        item("2025-03-04", DayStatus::Partial),
        item("2025-03-05", DayStatus::Goal),
        item("2025-03-06", DayStatus::Goal),
        item("2025-03-07", DayStatus::Goal),
    ];

    assert_eq!(streak_count(&history), 3);
}

#[test]
fn streak_includes_a_day_still_in_progress() {
    let history = vec![
        item("2025-03-06", DayStatus::Goal),
        item("2025-03-07", DayStatus::InProgress),
    ];

    assert_eq!(streak_count(&history), 2);
}

#[test]
fn streak_is_zero_when_the_latest_day_breaks_it() {
    let history = vec![
        item("2025-03-06", DayStatus::Goal),
        item("2025-03-07", DayStatus::Absence),
    ];

    assert_eq!(streak_count(&history), 0);
}

#[test]
fn day_record_round_trips_through_the_store() {
    let mut store = MemoryStore::new();

    work(&mut store, "2025-03-10", "09:00:00", "10:30:00");

    let clock = FixedClock(at("2025-03-10", "11:00:00"));
    let first = {
        let tracker = Tracker::new(&mut store, &clock, GOAL);
        tracker.day_record(date("2025-03-10")).unwrap()
    };
    let second = {
        let tracker = Tracker::new(&mut store, &clock, GOAL);
        tracker.day_record(date("2025-03-10")).unwrap()
    };

    assert_eq!(first, second);
}

#[test]
fn login_remembers_the_name_across_logout() {
    use punchlog::core::account;

    let mut store = MemoryStore::new();
    let clock = FixedClock(at("2025-03-10", "08:00:00"));

    let user = account::login(&mut store, &clock, "Alice").unwrap();
    assert_eq!(user.name, "Alice");
    assert_eq!(
        account::current_user(&store).unwrap().map(|u| u.name),
        Some("Alice".to_string())
    );

    account::logout(&mut store).unwrap();
    assert!(account::current_user(&store).unwrap().is_none());
    assert_eq!(
        account::last_user(&store).unwrap().as_deref(),
        Some("Alice")
    );
}

#[test]
fn blank_login_name_is_rejected() {
    use punchlog::core::account;

    let mut store = MemoryStore::new();
    let clock = FixedClock(at("2025-03-10", "08:00:00"));

    let err = account::login(&mut store, &clock, "  ").unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn missing_date_yields_the_default_record() {
    let mut store = MemoryStore::new();
    let clock = FixedClock(at("2025-03-10", "08:00:00"));
    let tracker = Tracker::new(&mut store, &clock, GOAL);

    let record = tracker.day_record(date("2020-01-01")).unwrap();
    assert_eq!(record, DayRecord::empty(date("2020-01-01")));
}
