use std::collections::HashMap;
use std::sync::Mutex;

use crate::{BlobStore, StorageError, validate_name};

/// In-process blob store. Contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a blob, e.g. to simulate state left by a previous run.
    #[must_use]
    pub fn with_blob(self, name: &str, bytes: impl Into<Vec<u8>>) -> Self {
        if let Ok(mut blobs) = self.blobs.lock() {
            blobs.insert(name.to_string(), bytes.into());
        }
        self
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError> {
        validate_name(name)?;
        let blobs = self.blobs.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(blobs.get(name).cloned())
    }

    fn write(&self, name: &str, bytes: &[u8]) -> Result<(), StorageError> {
        validate_name(name)?;
        let mut blobs = self.blobs.lock().map_err(|_| StorageError::Poisoned)?;
        blobs.insert(name.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<(), StorageError> {
        validate_name(name)?;
        let mut blobs = self.blobs.lock().map_err(|_| StorageError::Poisoned)?;
        blobs.remove(name);
        Ok(())
    }
}
