//! Periodic feed refresh as a cancellable background task.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use cw_auth::SessionContext;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::cache::FeedCache;
use crate::client::{FeedClient, FeedSource};

/// Outcome of one completed refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshEvent {
    /// 1 for the first refresh, incrementing after that.
    pub round: u64,
    pub source: FeedSource,
    pub count: usize,
    pub at: DateTime<Utc>,
}

/// Refreshes `cache` immediately and then every `interval` until cancelled or dropped.
pub struct RefreshTask {
    shutdown: watch::Sender<bool>,
    events: watch::Receiver<Option<RefreshEvent>>,
    handle: Option<JoinHandle<()>>,
}

impl RefreshTask {
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn spawn(
        client: Arc<FeedClient>,
        cache: Arc<FeedCache>,
        session: Arc<SessionContext>,
        interval: Duration,
    ) -> Self {
        let (shutdown, mut shutdown_rx) = watch::channel(false);
        let (events_tx, events) = watch::channel(None);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            let mut round = 0u64;
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let source = client.refresh(&cache, &session).await;
                        round += 1;
                        let event = RefreshEvent {
                            round,
                            source,
                            count: cache.len(),
                            at: Utc::now(),
                        };
                        tracing::debug!(
                            round,
                            source = source.as_str(),
                            count = event.count,
                            "feed refreshed"
                        );
                        // receivers may all be gone; the task keeps refreshing the cache
                        let _ = events_tx.send(Some(event));
                    }
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }
            tracing::debug!("feed refresh task stopped");
        });

        Self {
            shutdown,
            events,
            handle: Some(handle),
        }
    }

    /// Receiver that observes every completed refresh (latest value wins).
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<RefreshEvent>> {
        self.events.clone()
    }

    /// Stop the task and wait for it to exit. An in-flight fetch is allowed to finish.
    pub async fn cancel(mut self) {
        let _ = self.shutdown.send(true);
        if let Some(handle) = self.handle.take()
            && let Err(error) = handle.await
            && !error.is_cancelled()
        {
            tracing::warn!(%error, "feed refresh task panicked");
        }
    }
}

impl Drop for RefreshTask {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
