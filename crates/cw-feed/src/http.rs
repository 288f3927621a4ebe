//! Shared HTTP response helpers.

use crate::error::FeedError;

/// Longest response body excerpt carried in [`FeedError::Api`].
const MAX_ERROR_BODY: usize = 512;

/// Return the response unchanged on success, [`FeedError::Api`] otherwise.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, FeedError> {
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let mut message = resp.text().await.unwrap_or_default();
        if message.len() > MAX_ERROR_BODY {
            let mut cut = MAX_ERROR_BODY;
            while !message.is_char_boundary(cut) {
                cut -= 1;
            }
            message.truncate(cut);
        }
        return Err(FeedError::Api { status, message });
    }
    Ok(resp)
}
