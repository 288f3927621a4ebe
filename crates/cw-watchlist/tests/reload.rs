//! Watchlist persistence through a real data directory.

use std::sync::Arc;

use cw_core::sample::sample_feed;
use cw_storage::{BlobStore, FileBlobStore, WATCHLIST_BLOB};
use cw_watchlist::WatchlistStore;
use pretty_assertions::assert_eq;

#[test]
fn bookmark_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let store: Arc<dyn BlobStore> = Arc::new(FileBlobStore::new(dir.path()));

    let watchlist = WatchlistStore::open(Arc::clone(&store));
    assert!(watchlist.is_empty());
    assert!(watchlist.add(&sample_feed()[0]).unwrap());
    drop(watchlist);

    let reloaded = WatchlistStore::open(Arc::new(FileBlobStore::new(dir.path())));
    let entries = reloaded.list();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "1");
    assert_eq!(entries[0].date.as_deref(), Some("2024-02-15"));
}

#[test]
fn blob_is_a_json_array_of_entries() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileBlobStore::new(dir.path()));
    let watchlist = WatchlistStore::open(store.clone());
    for object in sample_feed() {
        watchlist.add(&object).unwrap();
    }

    let bytes = store.read(WATCHLIST_BLOB).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let ids: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(value[0]["risk_level"], "HIGH");
}

#[test]
fn removing_last_entry_persists_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileBlobStore::new(dir.path()));
    let watchlist = WatchlistStore::open(store.clone());
    watchlist.add(&sample_feed()[1]).unwrap();
    assert!(watchlist.remove("2").unwrap());

    assert_eq!(store.read(WATCHLIST_BLOB).unwrap().as_deref(), Some(&b"[]"[..]));
    assert!(WatchlistStore::open(store).is_empty());
}
