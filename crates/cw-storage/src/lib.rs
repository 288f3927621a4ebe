//! # cw-storage
//!
//! Named, whole-value blobs for the little state Cosmic Watch keeps between
//! runs: the session credential and the watchlist. Every write replaces the
//! previous value atomically; there is no partial update and no bulk clear.
//!
//! Two backends:
//! - [`FileBlobStore`]: one file per blob under a data directory, written via
//!   temp file + rename, owner-only permissions on unix.
//! - [`MemoryBlobStore`]: a map behind a mutex, for tests and throwaway sessions.

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;

/// Blob holding the session credential as a plain string.
pub const SESSION_TOKEN_BLOB: &str = "session_token";
/// Blob holding the watchlist as a JSON array.
pub const WATCHLIST_BLOB: &str = "watchlist.json";

/// Persisted key-value storage of opaque blobs.
pub trait BlobStore: Send + Sync {
    /// Read a blob. `Ok(None)` when it has never been written or was removed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the blob exists but cannot be read.
    fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace a blob's full contents.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the value cannot be written. The previous
    /// value, if any, is left intact.
    fn write(&self, name: &str, bytes: &[u8]) -> Result<(), StorageError>;

    /// Delete a blob. Removing a missing blob is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the blob exists but cannot be removed.
    fn remove(&self, name: &str) -> Result<(), StorageError>;
}

/// Blob names are plain file names: no separators, no dot-only names.
pub(crate) fn validate_name(name: &str) -> Result<(), StorageError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if invalid {
        return Err(StorageError::InvalidName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_names_are_valid() {
        assert!(validate_name(SESSION_TOKEN_BLOB).is_ok());
        assert!(validate_name(WATCHLIST_BLOB).is_ok());
    }

    #[test]
    fn path_like_names_are_rejected() {
        for name in ["", ".", "..", "../escape", "a/b", "a\\b"] {
            assert!(
                matches!(validate_name(name), Err(StorageError::InvalidName(_))),
                "{name:?} should be rejected"
            );
        }
    }
}
