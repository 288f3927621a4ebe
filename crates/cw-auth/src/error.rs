use cw_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend refused the request; the message is meant for the user.
    #[error("{0}")]
    Rejected(String),

    #[error("auth request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed auth response: {0}")]
    MalformedResponse(String),

    #[error("credential storage failed: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Short message suitable for showing next to a login/register form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) => message.clone(),
            Self::Http(_) => "Could not reach the server".to_string(),
            Self::MalformedResponse(_) => "Unexpected response from the server".to_string(),
            Self::Storage(_) => "Could not save your session".to_string(),
        }
    }
}
