//! Login and registration against the backend's `/auth/*` endpoints.

use std::time::Duration;

use cw_config::ApiConfig;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::session::SessionContext;

const LOGIN_PATH: &str = "/auth/login/";
const REGISTER_PATH: &str = "/auth/register/";
const LOGIN_FALLBACK_MESSAGE: &str = "Invalid credentials";
const REGISTER_FALLBACK_MESSAGE: &str = "Registration failed";

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    access: Option<String>,
}

/// Error body shape: `{"detail": "..."}` or `{"message": "..."}`.
#[derive(Deserialize, Default)]
struct ErrorBody {
    detail: Option<String>,
    message: Option<String>,
}

/// HTTP client for the auth endpoints.
pub struct AuthClient {
    http: reqwest::Client,
    api: ApiConfig,
}

impl AuthClient {
    /// # Errors
    ///
    /// Returns [`AuthError::Http`] if the underlying client cannot be built.
    pub fn new(api: ApiConfig) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("cosmic-watch/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;
        Ok(Self { http, api })
    }

    /// Exchange username/password for a credential and store it in `session`.
    ///
    /// On any failure the session is left as it was.
    ///
    /// # Errors
    ///
    /// [`AuthError::Rejected`] with the server's message (or "Invalid
    /// credentials") on a non-success status; transport, parse and storage
    /// failures map to their own variants.
    pub async fn login(
        &self,
        session: &SessionContext,
        username: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let resp = self
            .http
            .post(self.api.endpoint(LOGIN_PATH))
            .json(&LoginRequest { username, password })
            .send()
            .await?;

        if !resp.status().is_success() {
            let message = rejection_message(resp, LOGIN_FALLBACK_MESSAGE).await;
            tracing::info!(username, "login rejected");
            return Err(AuthError::Rejected(message));
        }

        let body: LoginResponse = resp
            .json()
            .await
            .map_err(|e| AuthError::MalformedResponse(format!("login body: {e}")))?;
        let token = body
            .access
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AuthError::MalformedResponse("login response missing 'access'".into()))?;

        session.set_credential(&token)?;
        tracing::info!(username, "logged in");
        Ok(())
    }

    /// Create an account. Does not sign in.
    ///
    /// # Errors
    ///
    /// [`AuthError::Rejected`] with the server's validation message (or
    /// "Registration failed") on a non-success status; [`AuthError::Http`] on
    /// transport failure.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let resp = self
            .http
            .post(self.api.endpoint(REGISTER_PATH))
            .json(&RegisterRequest {
                username,
                email,
                password,
            })
            .send()
            .await?;

        if !resp.status().is_success() {
            let message = rejection_message(resp, REGISTER_FALLBACK_MESSAGE).await;
            tracing::info!(username, "registration rejected");
            return Err(AuthError::Rejected(message));
        }

        tracing::info!(username, "registered");
        Ok(())
    }
}

async fn rejection_message(resp: reqwest::Response, fallback: &str) -> String {
    let body: ErrorBody = resp.json().await.unwrap_or_default();
    body.detail
        .or(body.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
