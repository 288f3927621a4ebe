//! Feed error types.

use thiserror::Error;

/// Errors that can occur while fetching the live feed.
///
/// [`crate::FeedClient::fetch_feed`] absorbs all of these into the fallback
/// sample; they are only visible through [`crate::FeedClient::try_fetch`].
#[derive(Debug, Error)]
pub enum FeedError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Response body was not a usable feed.
    #[error("parse error: {0}")]
    Parse(String),
}
