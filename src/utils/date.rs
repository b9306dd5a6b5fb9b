//! Calendar helpers: parsing, trailing weeks, weekend checks and the
//! period grammar used by `export --range`.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::errors::{AppError, AppResult};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// The 7 calendar dates ending at `end`, oldest first.
pub fn week_dates(end: NaiveDate) -> Vec<NaiveDate> {
    (0..7).rev().map(|i| end - Duration::days(i)).collect()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn weekday_short(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Expand a period string into its dates.
///
/// Accepted shapes: `YYYY-MM-DD` (one day), `YYYY-MM` (whole month),
/// `YYYY` (whole year).
pub fn dates_from_period(p: &str) -> AppResult<Vec<NaiveDate>> {
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok(vec![d]);
    }

    if let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        return Ok(days_of_month(first.year(), first.month()));
    }

    if let Ok(year) = p.parse::<i32>() {
        if (1970..=9999).contains(&year) {
            return Ok(days_of_year(year));
        }
    }

    Err(AppError::InvalidDate(p.to_string()))
}

/// Expand a range spec: a single period or `start:end` (both periods).
pub fn dates_from_range(spec: &str) -> AppResult<Vec<NaiveDate>> {
    match spec.split_once(':') {
        Some((a, b)) => {
            let from = dates_from_period(a)?;
            let to = dates_from_period(b)?;

            let start = *from.first().unwrap();
            let end = *to.last().unwrap();
            if end < start {
                return Err(AppError::InvalidDate(spec.to_string()));
            }

            let mut out = Vec::new();
            let mut d = start;
            while d <= end {
                out.push(d);
                d = d.succ_opt().unwrap();
            }
            Ok(out)
        }
        None => dates_from_period(spec),
    }
}

fn days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = NaiveDate::from_ymd_opt(year, month, 1).unwrap();

    while d.month() == month {
        out.push(d);
        d = d.succ_opt().unwrap();
    }

    out
}

fn days_of_year(year: i32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();

    while d.year() == year {
        out.push(d);
        d = d.succ_opt().unwrap();
    }

    out
}
