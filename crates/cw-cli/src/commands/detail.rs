use anyhow::Context;
use chrono::{DateTime, Utc};
use cw_core::approach::date_is_approaching;
use cw_core::{CoreError, ObjectDetail};
use cw_watchlist::is_approaching;
use serde_json::{Map, Value};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DetailArgs;
use crate::commands::shared::feed::refresh_feed;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &DetailArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    refresh_feed(ctx).await;

    let detail = ctx
        .watchlist
        .detail(&args.id, &ctx.cache)
        .ok_or_else(|| CoreError::NotFound {
            kind: "object".into(),
            id: args.id.clone(),
        })?;

    let view = detail_view(&detail, ctx.watchlist.contains(detail.id()), Utc::now())?;
    output(&view, flags.format)
}

/// Flatten a detail into one record: the object's own fields plus where it
/// came from, whether it is bookmarked and whether it is approaching.
pub fn detail_view(
    detail: &ObjectDetail,
    watched: bool,
    reference: DateTime<Utc>,
) -> anyhow::Result<Map<String, Value>> {
    let (source, fields, approaching) = match detail {
        ObjectDetail::Live(object) => (
            "live",
            serde_json::to_value(object),
            date_is_approaching(object.date, reference),
        ),
        ObjectDetail::Bookmarked(entry) => (
            "bookmarked",
            serde_json::to_value(entry),
            is_approaching(entry, reference),
        ),
    };

    let mut view = match fields.context("failed to serialize object detail")? {
        Value::Object(map) => map,
        other => anyhow::bail!("object detail serialized to a non-object: {other}"),
    };
    view.insert("source".into(), Value::from(source));
    view.insert("watched".into(), Value::from(watched));
    view.insert("approaching".into(), Value::from(approaching));
    Ok(view)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use cw_core::WatchlistEntry;
    use cw_core::sample::sample_feed;
    use pretty_assertions::assert_eq;

    use super::*;

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 12, 0, 0, 0).unwrap()
    }

    #[test]
    fn live_view_carries_full_record() {
        let detail = ObjectDetail::Live(sample_feed().remove(0));
        let view = detail_view(&detail, false, reference()).unwrap();
        assert_eq!(view["source"], "live");
        assert_eq!(view["risk_score"], 95);
        assert_eq!(view["approaching"], true);
        assert_eq!(view["watched"], false);
    }

    #[test]
    fn bookmarked_view_has_no_invented_measurements() {
        let entry = WatchlistEntry::from_object(&sample_feed()[1], reference());
        let view = detail_view(&ObjectDetail::Bookmarked(entry), true, reference()).unwrap();
        assert_eq!(view["source"], "bookmarked");
        assert_eq!(view["risk_level"], "LOW");
        assert!(!view.contains_key("risk_score"));
        assert!(!view.contains_key("miss_distance_km"));
        assert_eq!(view["approaching"], false);
    }
}
