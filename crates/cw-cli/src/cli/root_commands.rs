use clap::Args;
use cw_core::RiskFilter;

use crate::cli::subcommands::{AuthCommands, WatchCommands};

/// Top-level command tree.
#[derive(Clone, Debug, clap::Subcommand)]
pub enum Commands {
    /// Fetch the feed and list objects.
    Feed(FeedArgs),
    /// Total, hazardous and approaching counters for the current feed.
    Stats,
    /// Show one object from the feed or the watchlist.
    Detail(DetailArgs),
    /// Evaluate the risk model for the given measurements.
    Risk(RiskArgs),
    /// Watchlist management.
    Watch {
        #[command(subcommand)]
        action: WatchCommands,
    },
    /// Authentication.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Refresh the feed periodically until interrupted.
    Monitor(MonitorArgs),
}

/// Arguments for `cwatch feed`.
#[derive(Clone, Debug, Args)]
pub struct FeedArgs {
    /// Risk filter: all, low, medium, high (defaults to `general.default_filter`).
    #[arg(long)]
    pub filter: Option<RiskFilter>,
}

/// Arguments for `cwatch detail`.
#[derive(Clone, Debug, Args)]
pub struct DetailArgs {
    /// Object id.
    pub id: String,
}

/// Arguments for `cwatch risk`.
#[derive(Clone, Debug, Args)]
pub struct RiskArgs {
    /// The source feed flags the object as potentially hazardous.
    #[arg(long)]
    pub hazardous: bool,
    /// Closest approach distance in km.
    #[arg(long)]
    pub miss_distance_km: f64,
    /// Relative velocity in km/s.
    #[arg(long)]
    pub velocity_km_s: f64,
}

/// Arguments for `cwatch monitor`.
#[derive(Clone, Debug, Args)]
pub struct MonitorArgs {
    /// Seconds between refreshes (defaults to `api.refresh_interval_secs`).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,
}
