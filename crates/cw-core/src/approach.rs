//! Close-approach window helpers.
//!
//! An object is "approaching" when its close-approach date lies within seven
//! days of a reference instant, in either direction. Dates without a time
//! component are taken at 00:00 UTC.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

/// Width of the attention window on each side of the reference time, in days.
pub const APPROACH_WINDOW_DAYS: i64 = 7;

#[must_use]
pub fn approach_window() -> TimeDelta {
    TimeDelta::days(APPROACH_WINDOW_DAYS)
}

/// Parse an approach date as `YYYY-MM-DD` or RFC 3339.
#[must_use]
pub fn parse_approach_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

/// Whether `date` falls strictly inside the window around `reference`.
#[must_use]
pub fn is_within_window(date: DateTime<Utc>, reference: DateTime<Utc>) -> bool {
    (date - reference).abs() < approach_window()
}

/// Approach check for a calendar date.
#[must_use]
pub fn date_is_approaching(date: NaiveDate, reference: DateTime<Utc>) -> bool {
    date.and_hms_opt(0, 0, 0)
        .is_some_and(|midnight| is_within_window(midnight.and_utc(), reference))
}

/// Approach check for an optional free-form date. Missing or unparseable
/// values are never approaching.
#[must_use]
pub fn raw_date_is_approaching(date: Option<&str>, reference: DateTime<Utc>) -> bool {
    date.and_then(parse_approach_date)
        .is_some_and(|date| is_within_window(date, reference))
}
