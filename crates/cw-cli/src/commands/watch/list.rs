use chrono::{DateTime, Utc};
use cw_core::{RiskLevel, WatchlistEntry};
use cw_watchlist::is_approaching;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::context::AppContext;
use crate::output::output_rows;

const WATCH_COLUMNS: &[&str] = &[
    "id",
    "name",
    "date",
    "risk_level",
    "hazardous",
    "approaching",
    "added_at",
];

#[derive(Debug, Serialize)]
struct WatchRow {
    id: String,
    name: String,
    date: Option<String>,
    risk_level: RiskLevel,
    hazardous: bool,
    approaching: bool,
    added_at: DateTime<Utc>,
}

impl WatchRow {
    fn new(entry: &WatchlistEntry, reference: DateTime<Utc>) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.display_name().to_string(),
            date: entry.date.clone(),
            risk_level: entry.risk_level,
            hazardous: entry.hazardous,
            approaching: is_approaching(entry, reference),
            added_at: entry.added_at,
        }
    }
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let now = Utc::now();
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let rows = apply_limit(ctx.watchlist.list(), limit)
        .iter()
        .map(|entry| WatchRow::new(entry, now))
        .collect::<Vec<_>>();
    output_rows(&rows, WATCH_COLUMNS, flags.format)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use cw_core::sample::sample_feed;

    use super::*;

    #[test]
    fn row_flags_entries_near_reference() {
        let reference = Utc.with_ymd_and_hms(2024, 2, 18, 12, 0, 0).unwrap();
        let rows: Vec<_> = sample_feed()
            .iter()
            .map(|object| {
                WatchRow::new(&WatchlistEntry::from_object(object, reference), reference)
            })
            .collect();
        assert!(rows.iter().all(|row| row.approaching));

        let later = Utc.with_ymd_and_hms(2024, 3, 30, 0, 0, 0).unwrap();
        let entry = WatchlistEntry::from_object(&sample_feed()[0], reference);
        assert!(!WatchRow::new(&entry, later).approaching);
    }
}
