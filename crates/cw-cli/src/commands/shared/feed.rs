use cw_feed::FeedSource;

use crate::context::AppContext;
use crate::progress::Progress;

/// Refresh the feed cache, with a spinner while the request is in flight.
pub async fn refresh_feed(ctx: &AppContext) -> FeedSource {
    let progress = Progress::spinner("Fetching near-Earth object feed...");
    let source = ctx.feed.refresh(&ctx.cache, &ctx.session).await;
    progress.finish_clear();

    if source == FeedSource::Fallback {
        tracing::warn!(
            base_url = %ctx.config.api.base_url,
            "live feed unavailable; showing built-in sample data"
        );
    }
    source
}
