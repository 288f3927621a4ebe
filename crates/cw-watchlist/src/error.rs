use cw_storage::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum WatchlistError {
    #[error("failed to persist watchlist: {0}")]
    Storage(#[from] StorageError),

    #[error("failed to serialize watchlist: {0}")]
    Serialize(#[from] serde_json::Error),
}
