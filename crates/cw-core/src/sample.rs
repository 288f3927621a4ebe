//! Built-in fallback feed.
//!
//! Served whenever the live feed cannot be fetched so the dashboard always has
//! something to render. The contents are fixed; risk fields are derived like
//! any other record.

use chrono::NaiveDate;

use crate::entities::NearEarthObject;

/// The documented two-object sample feed.
#[must_use]
pub fn sample_feed() -> Vec<NearEarthObject> {
    vec![
        NearEarthObject::new(
            "1",
            "(2024 AA)",
            0.15,
            15.5,
            2_500_000.0,
            ymd(2024, 2, 15),
            true,
        ),
        NearEarthObject::new(
            "2",
            "(2023 BB)",
            0.08,
            8.2,
            8_500_000.0,
            ymd(2024, 2, 20),
            false,
        ),
    ]
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
