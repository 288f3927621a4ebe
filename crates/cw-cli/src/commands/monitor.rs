use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use cw_feed::{FeedSource, RefreshEvent, RefreshTask};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MonitorArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct MonitorTick {
    round: u64,
    at: DateTime<Utc>,
    source: FeedSource,
    total: usize,
    hazardous: usize,
    approaching: usize,
}

/// Refresh on an interval and print counters after each refresh, until Ctrl-C.
pub async fn handle(
    args: &MonitorArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let interval =
        Duration::from_secs(args.interval.unwrap_or(ctx.config.api.refresh_interval_secs));
    tracing::info!(interval_secs = interval.as_secs(), "starting feed monitor");

    let task = RefreshTask::spawn(
        Arc::clone(&ctx.feed),
        Arc::clone(&ctx.cache),
        Arc::clone(&ctx.session),
        interval,
    );
    let mut events = task.subscribe();

    let result = loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                break signal.map_err(anyhow::Error::from);
            }
            changed = events.changed() => {
                if changed.is_err() {
                    break Err(anyhow::anyhow!("feed refresh task stopped unexpectedly"));
                }
                let event = *events.borrow_and_update();
                if let Some(event) = event {
                    output(&tick(&event, ctx), flags.format)?;
                }
            }
        }
    };

    task.cancel().await;
    result
}

fn tick(event: &RefreshEvent, ctx: &AppContext) -> MonitorTick {
    let stats = ctx.cache.stats(event.at);
    if event.source == FeedSource::Fallback {
        tracing::warn!(
            round = event.round,
            "live feed unavailable; showing built-in sample data"
        );
    }
    MonitorTick {
        round: event.round,
        at: event.at,
        source: event.source,
        total: stats.total,
        hazardous: stats.hazardous,
        approaching: stats.approaching,
    }
}
