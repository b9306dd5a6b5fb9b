//! Snapshot document mirrored to the remote bin: the five collections the
//! local store flattens into, plus a metadata block.

use std::collections::BTreeMap;

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::core::account;
use crate::errors::AppResult;
use crate::models::day_record::DayRecord;
use crate::models::session::{SessionStatus, WorkSession};
use crate::store::{DAY_PREFIX, Store, day_key};

pub const SNAPSHOT_VERSION: &str = "1.0";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub users: Vec<UserRow>,
    pub sessions: Vec<SessionRow>,
    pub workdays: Vec<WorkdayRow>,
    pub justifications: Vec<JustificationRow>,
    pub settings: Vec<SettingsRow>,
    #[serde(default)]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Local>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub login_date: DateTime<Local>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRow {
    pub id: String,
    pub date: NaiveDate,
    pub start_time: DateTime<Local>,
    #[serde(default)]
    pub end_time: Option<DateTime<Local>>,
    pub duration_minutes: i64,
    pub status: SessionStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkdayRow {
    pub id: String,
    pub date: NaiveDate,
    pub total_minutes: i64,
    pub goal_met: bool,
    pub workday_closed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JustificationRow {
    pub id: String,
    pub date: NaiveDate,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsRow {
    pub id: String,
    pub daily_goal_minutes: i64,
}

/// Flatten the whole local store into the mirrored collections.
pub fn build_snapshot(store: &dyn Store, cfg: &Config) -> AppResult<Snapshot> {
    let mut records = Vec::new();
    for key in store.keys(DAY_PREFIX)? {
        if let Some(json) = store.get(&key)? {
            records.push(serde_json::from_str(&json)?);
        }
    }
    from_records(store, cfg, &records)
}

/// Flatten a chosen set of day records (plus the current user and the
/// app settings) into a snapshot.
pub fn from_records(store: &dyn Store, cfg: &Config, records: &[DayRecord]) -> AppResult<Snapshot> {
    let mut snap = Snapshot {
        metadata: Metadata {
            version: SNAPSHOT_VERSION.to_string(),
            last_updated: Some(Local::now()),
        },
        ..Default::default()
    };

    if let Some(user) = account::current_user(store)? {
        snap.users.push(UserRow {
            id: user.name.clone(),
            name: user.name,
            login_date: user.login_date,
        });
    }

    for record in records {
        for s in &record.sessions {
            snap.sessions.push(SessionRow {
                id: s.id.clone(),
                date: record.date,
                start_time: s.start_time,
                end_time: s.end_time,
                duration_minutes: s.duration_minutes,
                status: s.status,
            });
        }

        if let Some(text) = &record.justification {
            snap.justifications.push(JustificationRow {
                id: format!("just-{}", record.date),
                date: record.date,
                text: text.clone(),
            });
        }

        snap.workdays.push(WorkdayRow {
            id: record.date.to_string(),
            date: record.date,
            total_minutes: record.total_minutes,
            goal_met: record.goal_met,
            workday_closed: record.workday_closed,
        });
    }

    snap.settings.push(SettingsRow {
        id: "app_settings".to_string(),
        daily_goal_minutes: cfg.daily_goal_minutes,
    });

    Ok(snap)
}

/// Concatenate-and-dedupe merge. Row identity is the `id` field and the
/// first occurrence wins, so local rows take precedence; settings come
/// from the remote side when present.
pub fn merge(local: Snapshot, remote: Snapshot) -> Snapshot {
    fn dedupe<T>(rows: Vec<T>, id: impl Fn(&T) -> String) -> Vec<T> {
        let mut seen = std::collections::HashSet::new();
        rows.into_iter().filter(|r| seen.insert(id(r))).collect()
    }

    let Snapshot {
        users: lu,
        sessions: ls,
        workdays: lw,
        justifications: lj,
        settings: lset,
        ..
    } = local;
    let Snapshot {
        users: ru,
        sessions: rs,
        workdays: rw,
        justifications: rj,
        settings: rset,
        ..
    } = remote;

    Snapshot {
        users: dedupe([lu, ru].concat(), |r| r.id.clone()),
        sessions: dedupe([ls, rs].concat(), |r| r.id.clone()),
        workdays: dedupe([lw, rw].concat(), |r| r.id.clone()),
        justifications: dedupe([lj, rj].concat(), |r| r.id.clone()),
        settings: if rset.is_empty() { lset } else { rset },
        metadata: Metadata {
            version: SNAPSHOT_VERSION.to_string(),
            last_updated: Some(Local::now()),
        },
    }
}

/// Rebuild day records from a snapshot and write them into the store.
/// Returns the number of days written.
pub fn apply_snapshot(
    store: &mut dyn Store,
    snap: &Snapshot,
    goal_minutes: i64,
) -> AppResult<usize> {
    let mut days: BTreeMap<NaiveDate, DayRecord> = BTreeMap::new();

    for w in &snap.workdays {
        days.entry(w.date)
            .or_insert_with(|| DayRecord::empty(w.date))
            .workday_closed = w.workday_closed;
    }

    for s in &snap.sessions {
        let day = days.entry(s.date).or_insert_with(|| DayRecord::empty(s.date));
        day.sessions.push(WorkSession {
            id: s.id.clone(),
            start_time: s.start_time,
            end_time: s.end_time,
            duration_minutes: s.duration_minutes,
            status: s.status,
        });
    }

    for j in &snap.justifications {
        days.entry(j.date)
            .or_insert_with(|| DayRecord::empty(j.date))
            .justification = Some(j.text.clone());
    }

    let count = days.len();
    for day in days.values_mut() {
        day.sessions.sort_by_key(|s| s.start_time);
        day.recompute(goal_minutes);
        store.set(&day_key(day.date), &serde_json::to_string(day)?)?;
    }

    Ok(count)
}
