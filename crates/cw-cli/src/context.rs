use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use cw_auth::{AuthClient, SessionContext};
use cw_config::CosmicConfig;
use cw_feed::{FeedCache, FeedClient};
use cw_storage::{BlobStore, FileBlobStore};
use cw_watchlist::WatchlistStore;

/// Application state, built once in `main` and passed to every handler.
pub struct AppContext {
    pub config: CosmicConfig,
    pub data_dir: PathBuf,
    pub session: Arc<SessionContext>,
    pub auth: AuthClient,
    pub feed: Arc<FeedClient>,
    pub cache: Arc<FeedCache>,
    pub watchlist: WatchlistStore,
}

impl AppContext {
    /// Open the data directory and rehydrate the session and watchlist from it.
    pub fn init(config: CosmicConfig) -> anyhow::Result<Self> {
        let data_dir = config.storage.resolved_data_dir().context(
            "could not determine a data directory; set COSMIC_WATCH_STORAGE__DATA_DIR",
        )?;
        let store: Arc<dyn BlobStore> = Arc::new(FileBlobStore::new(&data_dir));
        Self::with_store(config, data_dir, store)
    }

    /// Build the context over an explicit blob store.
    pub fn with_store(
        config: CosmicConfig,
        data_dir: PathBuf,
        store: Arc<dyn BlobStore>,
    ) -> anyhow::Result<Self> {
        let session = Arc::new(SessionContext::restore(Arc::clone(&store)));
        let watchlist = WatchlistStore::open(store);
        let auth =
            AuthClient::new(config.api.clone()).context("failed to build auth HTTP client")?;
        let feed =
            Arc::new(FeedClient::new(&config.api).context("failed to build feed HTTP client")?);

        tracing::debug!(
            data_dir = %data_dir.display(),
            authenticated = session.is_authenticated(),
            watchlist = watchlist.len(),
            "application context ready"
        );

        Ok(Self {
            config,
            data_dir,
            session,
            auth,
            feed,
            cache: Arc::new(FeedCache::new()),
            watchlist,
        })
    }
}
