use cw_core::{NearEarthObject, RiskLevel};
use cw_feed::FeedSource;
use serde::Serialize;

use crate::cli::root_commands::FeedArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::feed::refresh_feed;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::context::AppContext;
use crate::output::{output, output_rows};

pub const FEED_COLUMNS: &[&str] = &[
    "id",
    "name",
    "date",
    "risk_level",
    "risk_score",
    "hazardous",
    "miss_distance_km",
    "velocity_km_s",
    "diameter_km",
    "watched",
];

#[derive(Debug, Serialize)]
pub struct FeedRow {
    pub id: String,
    pub name: String,
    pub date: String,
    pub risk_level: RiskLevel,
    pub risk_score: u8,
    pub hazardous: bool,
    pub miss_distance_km: f64,
    pub velocity_km_s: f64,
    pub diameter_km: f64,
    pub watched: bool,
}

impl FeedRow {
    pub fn new(object: &NearEarthObject, watched: bool) -> Self {
        Self {
            id: object.id.clone(),
            name: object.display_name().to_string(),
            date: object.date.format("%Y-%m-%d").to_string(),
            risk_level: object.risk_level(),
            risk_score: object.risk_score(),
            hazardous: object.hazardous(),
            miss_distance_km: object.miss_distance_km(),
            velocity_km_s: object.velocity_km_s(),
            diameter_km: object.diameter_km,
            watched,
        }
    }
}

#[derive(Serialize)]
struct FeedResponse {
    source: FeedSource,
    filter: String,
    matched: usize,
    objects: Vec<FeedRow>,
}

pub async fn handle(
    args: &FeedArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = match args.filter {
        Some(filter) => filter,
        None => ctx.config.general.risk_filter()?,
    };
    let source = refresh_feed(ctx).await;

    let matched = ctx.cache.filter(filter);
    let total = matched.len();
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let rows = rows_for(&apply_limit(matched, limit), ctx);

    if flags.format == OutputFormat::Table {
        return output_rows(&rows, FEED_COLUMNS, flags.format);
    }
    output(
        &FeedResponse {
            source,
            filter: filter.to_string(),
            matched: total,
            objects: rows,
        },
        flags.format,
    )
}

fn rows_for(objects: &[NearEarthObject], ctx: &AppContext) -> Vec<FeedRow> {
    objects
        .iter()
        .map(|object| FeedRow::new(object, ctx.watchlist.contains(&object.id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use cw_core::sample::sample_feed;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn row_uses_display_name_and_derived_risk() {
        let object = sample_feed().remove(0).with_name_limited("2024 AA");
        let row = FeedRow::new(&object, true);
        assert_eq!(row.name, "2024 AA");
        assert_eq!(row.risk_level, RiskLevel::High);
        assert_eq!(row.risk_score, 95);
        assert_eq!(row.date, "2024-02-15");
        assert!(row.watched);
    }

    #[test]
    fn row_columns_are_all_listed() {
        let row = serde_json::to_value(FeedRow::new(&sample_feed()[1], false)).unwrap();
        let keys: Vec<_> = row.as_object().unwrap().keys().cloned().collect();
        for key in &keys {
            assert!(FEED_COLUMNS.contains(&key.as_str()), "{key} missing from FEED_COLUMNS");
        }
        assert_eq!(keys.len(), FEED_COLUMNS.len());
    }
}
