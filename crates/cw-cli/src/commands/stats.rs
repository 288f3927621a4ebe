use chrono::Utc;
use cw_feed::FeedSource;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::feed::refresh_feed;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct StatsResponse {
    source: FeedSource,
    total: usize,
    hazardous: usize,
    approaching: usize,
    watchlist: usize,
    watchlist_approaching: usize,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let source = refresh_feed(ctx).await;
    let now = Utc::now();
    let stats = ctx.cache.stats(now);

    output(
        &StatsResponse {
            source,
            total: stats.total,
            hazardous: stats.hazardous,
            approaching: stats.approaching,
            watchlist: ctx.watchlist.len(),
            watchlist_approaching: ctx.watchlist.approaching(now).len(),
        },
        flags.format,
    )
}
