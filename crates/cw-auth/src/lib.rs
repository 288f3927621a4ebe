//! # cw-auth
//!
//! Session handling for Cosmic Watch.
//!
//! - [`SessionContext`]: optional bearer credential, persisted in the
//!   `session_token` blob so it survives restarts, cleared by logout.
//! - [`AuthClient`]: `POST /auth/login/` and `POST /auth/register/`.
//!
//! Failed logins and registrations surface as [`AuthError::Rejected`] carrying
//! a user-facing message and never touch the session.

pub mod client;
pub mod error;
pub mod session;

pub use client::AuthClient;
pub use error::AuthError;
pub use session::SessionContext;
