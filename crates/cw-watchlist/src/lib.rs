//! # cw-watchlist
//!
//! The user's bookmarks: at most one [`WatchlistEntry`] per object id, kept in
//! insertion order and persisted as one JSON array in the `watchlist.json`
//! blob on every mutation.

mod error;
mod store;

pub use error::WatchlistError;
pub use store::{WatchlistStore, is_approaching};

pub use cw_core::WatchlistEntry;
