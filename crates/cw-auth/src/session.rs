//! Session credential held in memory and mirrored to the `session_token` blob.
//!
//! A restored credential survives reloads; [`SessionContext::logout`] clears
//! both copies before returning. Corrupt or unreadable blobs restore as an
//! anonymous session.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use cw_storage::{BlobStore, SESSION_TOKEN_BLOB};

use crate::error::AuthError;

pub struct SessionContext {
    credential: RwLock<Option<String>>,
    store: Arc<dyn BlobStore>,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl SessionContext {
    /// Anonymous session backed by `store`, ignoring anything already persisted.
    #[must_use]
    pub fn anonymous(store: Arc<dyn BlobStore>) -> Self {
        Self {
            credential: RwLock::new(None),
            store,
        }
    }

    /// Rehydrate the credential persisted by a previous run.
    #[must_use]
    pub fn restore(store: Arc<dyn BlobStore>) -> Self {
        let credential = match store.read(SESSION_TOKEN_BLOB) {
            Ok(Some(bytes)) => match String::from_utf8(bytes) {
                Ok(token) => Some(token.trim().to_string()).filter(|t| !t.is_empty()),
                Err(_) => {
                    tracing::warn!("stored session credential is not UTF-8; starting anonymous");
                    None
                }
            },
            Ok(None) => None,
            Err(error) => {
                tracing::warn!(
                    %error,
                    "failed to read stored session credential; starting anonymous"
                );
                None
            }
        };
        Self {
            credential: RwLock::new(credential),
            store,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read_guard().is_some()
    }

    /// Current credential, if signed in.
    #[must_use]
    pub fn credential(&self) -> Option<String> {
        self.read_guard().clone()
    }

    /// Persist and adopt a new credential.
    ///
    /// The blob is written first; if that fails the session is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] if the credential cannot be persisted.
    pub fn set_credential(&self, credential: &str) -> Result<(), AuthError> {
        let credential = credential.trim();
        if credential.is_empty() {
            return Err(AuthError::MalformedResponse("empty credential".into()));
        }
        self.store.write(SESSION_TOKEN_BLOB, credential.as_bytes())?;
        *self.write_guard() = Some(credential.to_string());
        Ok(())
    }

    /// Forget the credential, in memory and on disk. No network call.
    ///
    /// The in-memory credential is always cleared, even if removing the blob fails.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] if the persisted blob cannot be removed.
    pub fn logout(&self) -> Result<(), AuthError> {
        *self.write_guard() = None;
        self.store.remove(SESSION_TOKEN_BLOB)?;
        Ok(())
    }

    /// Attach `Authorization: Bearer <credential>` when signed in.
    #[must_use]
    pub fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.credential() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, Option<String>> {
        self.credential
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Option<String>> {
        self.credential
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
