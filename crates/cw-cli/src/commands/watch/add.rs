use anyhow::Context;
use cw_core::CoreError;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::feed::refresh_feed;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct WatchAddResponse {
    id: String,
    name: String,
    /// False when the object was already on the watchlist.
    added: bool,
    watchlist: usize,
}

pub async fn handle(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    refresh_feed(ctx).await;

    let object = ctx.cache.find_by_id(id).ok_or_else(|| CoreError::NotFound {
        kind: "object in the current feed".into(),
        id: id.to_string(),
    })?;
    let added = ctx
        .watchlist
        .add(&object)
        .with_context(|| format!("failed to add '{id}' to the watchlist"))?;

    output(
        &WatchAddResponse {
            id: object.id.clone(),
            name: object.display_name().to_string(),
            added,
            watchlist: ctx.watchlist.len(),
        },
        flags.format,
    )
}
