use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct WatchRemoveResponse {
    id: String,
    removed: bool,
    watchlist: usize,
}

pub fn handle(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let removed = ctx
        .watchlist
        .remove(id)
        .with_context(|| format!("failed to remove '{id}' from the watchlist"))?;
    if !removed {
        tracing::warn!(id, "not on the watchlist");
    }

    output(
        &WatchRemoveResponse {
            id: id.to_string(),
            removed,
            watchlist: ctx.watchlist.len(),
        },
        flags.format,
    )
}
