use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use cw_core::approach::raw_date_is_approaching;
use cw_core::{NearEarthObject, ObjectDetail, WatchlistEntry};
use cw_feed::FeedCache;
use cw_storage::{BlobStore, WATCHLIST_BLOB};

use crate::error::WatchlistError;

/// Whether the entry's approach date is within seven days of `reference`.
/// A missing or unparseable date is never approaching.
#[must_use]
pub fn is_approaching(entry: &WatchlistEntry, reference: DateTime<Utc>) -> bool {
    raw_date_is_approaching(entry.date.as_deref(), reference)
}

/// Bookmarked objects, mirrored to the `watchlist.json` blob.
///
/// Every mutation serializes the would-be set and writes it before the
/// in-memory copy changes, so a failed write leaves both copies as they were.
pub struct WatchlistStore {
    entries: RwLock<Vec<WatchlistEntry>>,
    store: Arc<dyn BlobStore>,
}

impl std::fmt::Debug for WatchlistStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchlistStore")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl WatchlistStore {
    /// Rehydrate from `store`. An absent blob is an empty watchlist; so is a
    /// malformed one, after a warning.
    #[must_use]
    pub fn open(store: Arc<dyn BlobStore>) -> Self {
        let entries = match store.read(WATCHLIST_BLOB) {
            Ok(Some(bytes)) => decode(&bytes),
            Ok(None) => Vec::new(),
            Err(error) => {
                tracing::warn!(%error, "failed to read watchlist; starting empty");
                Vec::new()
            }
        };
        Self {
            entries: RwLock::new(entries),
            store,
        }
    }

    /// Bookmark `object` now. See [`WatchlistStore::add_at`].
    ///
    /// # Errors
    ///
    /// Returns [`WatchlistError`] if the new set cannot be persisted.
    pub fn add(&self, object: &NearEarthObject) -> Result<bool, WatchlistError> {
        self.add_at(object, Utc::now())
    }

    /// Bookmark `object` with an explicit timestamp.
    ///
    /// Returns `Ok(false)` without touching storage when the id is already
    /// present; the existing entry, `added_at` included, is kept.
    ///
    /// # Errors
    ///
    /// Returns [`WatchlistError`] if the new set cannot be persisted.
    pub fn add_at(
        &self,
        object: &NearEarthObject,
        added_at: DateTime<Utc>,
    ) -> Result<bool, WatchlistError> {
        let mut entries = self.write_guard();
        if entries.iter().any(|entry| entry.id == object.id) {
            return Ok(false);
        }
        let mut next = entries.clone();
        next.push(WatchlistEntry::from_object(object, added_at));
        self.persist(&next)?;
        *entries = next;
        tracing::debug!(id = %object.id, "added to watchlist");
        Ok(true)
    }

    /// Remove the entry for `id`. `Ok(false)` when there was none.
    ///
    /// # Errors
    ///
    /// Returns [`WatchlistError`] if the new set cannot be persisted.
    pub fn remove(&self, id: &str) -> Result<bool, WatchlistError> {
        let mut entries = self.write_guard();
        let Some(index) = entries.iter().position(|entry| entry.id == id) else {
            return Ok(false);
        };
        let mut next = entries.clone();
        next.remove(index);
        self.persist(&next)?;
        *entries = next;
        tracing::debug!(id, "removed from watchlist");
        Ok(true)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.read_guard().iter().any(|entry| entry.id == id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<WatchlistEntry> {
        self.read_guard().iter().find(|entry| entry.id == id).cloned()
    }

    /// All entries, oldest bookmark first.
    #[must_use]
    pub fn list(&self) -> Vec<WatchlistEntry> {
        self.read_guard().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }

    /// Entries whose approach date is within the window around `reference`.
    #[must_use]
    pub fn approaching(&self, reference: DateTime<Utc>) -> Vec<WatchlistEntry> {
        self.read_guard()
            .iter()
            .filter(|entry| is_approaching(entry, reference))
            .cloned()
            .collect()
    }

    /// Look `id` up in the live feed first, then among the bookmarks.
    #[must_use]
    pub fn detail(&self, id: &str, feed: &FeedCache) -> Option<ObjectDetail> {
        feed.find_by_id(id)
            .map(ObjectDetail::Live)
            .or_else(|| self.get(id).map(ObjectDetail::Bookmarked))
    }

    fn persist(&self, entries: &[WatchlistEntry]) -> Result<(), WatchlistError> {
        let bytes = serde_json::to_vec(entries)?;
        self.store.write(WATCHLIST_BLOB, &bytes)?;
        Ok(())
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, Vec<WatchlistEntry>> {
        self.entries
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Vec<WatchlistEntry>> {
        self.entries
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// Decode a persisted watchlist, keeping the first entry per id.
fn decode(bytes: &[u8]) -> Vec<WatchlistEntry> {
    let entries: Vec<WatchlistEntry> = match serde_json::from_slice(bytes) {
        Ok(entries) => entries,
        Err(error) => {
            tracing::warn!(%error, "stored watchlist is malformed; starting empty");
            return Vec::new();
        }
    };
    let total = entries.len();
    let mut unique: Vec<WatchlistEntry> = Vec::with_capacity(total);
    for entry in entries {
        if !unique.iter().any(|kept| kept.id == entry.id) {
            unique.push(entry);
        }
    }
    if unique.len() < total {
        tracing::warn!(dropped = total - unique.len(), "stored watchlist had duplicate ids");
    }
    unique
}
