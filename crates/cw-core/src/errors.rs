//! Cross-cutting error types for Cosmic Watch.
//!
//! Component errors (`FeedError`, `AuthError`, `WatchlistError`, ...) live in
//! their own crates; the CLI folds everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Cosmic Watch crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Object lookup returned no result.
    #[error("{kind} not found: {id}")]
    NotFound { kind: String, id: String },

    /// Data failed validation (format, range, unknown variant).
    #[error("Validation error: {0}")]
    Validation(String),
}
