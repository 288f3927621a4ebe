//! # cw-feed
//!
//! Near-Earth object feed for Cosmic Watch.
//!
//! - [`FeedClient`]: `GET /asteroids/feed/`, bearer-authenticated when the
//!   session holds a credential. [`FeedClient::fetch_feed`] never fails; any
//!   transport, status or parse error yields the built-in sample instead.
//! - [`FeedCache`]: the latest feed, replaced wholesale on each refresh and
//!   queried by risk filter or id.
//! - [`RefreshTask`]: background loop that refreshes a cache on an interval.

pub mod cache;
pub mod client;
pub mod refresh;
pub mod wire;

mod error;
mod http;

pub use cache::FeedCache;
pub use client::{FeedClient, FeedFetch, FeedSource};
pub use error::FeedError;
pub use refresh::{RefreshEvent, RefreshTask};
