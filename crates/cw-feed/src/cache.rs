//! In-memory cache of the most recent feed.
//!
//! The collection sits behind an `Arc` that is swapped whole on
//! [`FeedCache::replace`]; readers clone the `Arc` under a short read lock, so
//! every query sees either the previous feed or the new one in full.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use cw_core::stats::FeedStats;
use cw_core::{NearEarthObject, RiskFilter};

#[derive(Debug, Default)]
pub struct FeedCache {
    objects: RwLock<Arc<Vec<NearEarthObject>>>,
}

impl FeedCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a new feed. No merge with the previous contents.
    pub fn replace(&self, objects: Vec<NearEarthObject>) {
        let next = Arc::new(objects);
        let mut guard = self
            .objects
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = next;
    }

    /// The current feed as one consistent snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<NearEarthObject>> {
        Arc::clone(
            &self
                .objects
                .read()
                .unwrap_or_else(std::sync::PoisonError::into_inner),
        )
    }

    /// Objects passing `filter`, in feed order. Recomputed on every call.
    #[must_use]
    pub fn filter(&self, filter: RiskFilter) -> Vec<NearEarthObject> {
        self.snapshot()
            .iter()
            .filter(|object| filter.matches(object.risk_level()))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<NearEarthObject> {
        self.snapshot().iter().find(|object| object.id == id).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    #[must_use]
    pub fn stats(&self, reference: DateTime<Utc>) -> FeedStats {
        FeedStats::compute(&self.snapshot(), reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cw_core::RiskLevel;
    use cw_core::sample::sample_feed;
    use pretty_assertions::assert_eq;

    fn object(id: &str, hazardous: bool, miss_distance_km: f64) -> NearEarthObject {
        NearEarthObject::new(
            id,
            format!("({id})"),
            0.2,
            10.0,
            miss_distance_km,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            hazardous,
        )
    }

    fn ids(objects: &[NearEarthObject]) -> Vec<&str> {
        objects.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn starts_empty() {
        let cache = FeedCache::new();
        assert!(cache.is_empty());
        assert!(cache.filter(RiskFilter::All).is_empty());
        assert!(cache.find_by_id("1").is_none());
    }

    #[test]
    fn replace_swaps_everything() {
        let cache = FeedCache::new();
        cache.replace(sample_feed());
        assert_eq!(cache.len(), 2);

        cache.replace(vec![object("x", false, 1e8)]);
        assert_eq!(ids(&cache.filter(RiskFilter::All)), vec!["x"]);
        assert!(cache.find_by_id("1").is_none());
    }

    #[test]
    fn filter_by_level_keeps_order_and_is_non_destructive() {
        let cache = FeedCache::new();
        cache.replace(vec![
            object("a", true, 1e8),
            object("b", false, 1e6),
            object("c", false, 1e8),
            object("d", true, 1e6),
            object("e", false, 2e6),
        ]);

        let high = cache.filter(RiskFilter::Level(RiskLevel::High));
        assert_eq!(ids(&high), vec!["a", "d"]);
        let medium = cache.filter(RiskFilter::Level(RiskLevel::Medium));
        assert_eq!(ids(&medium), vec!["b", "e"]);
        let low = cache.filter(RiskFilter::Level(RiskLevel::Low));
        assert_eq!(ids(&low), vec!["c"]);

        assert_eq!(cache.len(), 5);
        assert_eq!(ids(&cache.filter(RiskFilter::All)), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn find_by_id_returns_full_record() {
        let cache = FeedCache::new();
        cache.replace(sample_feed());
        let found = cache.find_by_id("2").unwrap();
        assert_eq!(found.name, "(2023 BB)");
        assert_eq!(found.risk_level(), RiskLevel::Low);
    }

    #[test]
    fn old_snapshot_is_unaffected_by_replace() {
        let cache = FeedCache::new();
        cache.replace(sample_feed());
        let before = cache.snapshot();
        cache.replace(Vec::new());
        assert_eq!(before.len(), 2);
        assert!(cache.is_empty());
    }

    #[test]
    fn concurrent_readers_never_see_partial_feeds() {
        let cache = Arc::new(FeedCache::new());
        let small: Vec<_> = (0..3).map(|i| object(&format!("s{i}"), false, 1e8)).collect();
        let large: Vec<_> = (0..50).map(|i| object(&format!("l{i}"), true, 1e6)).collect();
        cache.replace(small.clone());

        let writer = {
            let cache = Arc::clone(&cache);
            std::thread::spawn(move || {
                for round in 0..200 {
                    if round % 2 == 0 {
                        cache.replace(large.clone());
                    } else {
                        cache.replace(small.clone());
                    }
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    for _ in 0..500 {
                        let snapshot = cache.snapshot();
                        assert!(snapshot.len() == 3 || snapshot.len() == 50);
                        let prefix = if snapshot.len() == 3 { "s" } else { "l" };
                        assert!(snapshot.iter().all(|o| o.id.starts_with(prefix)));
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
