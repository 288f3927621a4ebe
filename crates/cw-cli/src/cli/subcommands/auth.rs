use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in and store the session credential.
    Login(AuthLoginArgs),
    /// Create an account (does not sign in).
    Register(AuthRegisterArgs),
    /// Clear the stored credential. No network call.
    Logout,
    /// Show whether a credential is stored.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    pub username: String,
    #[arg(long, env = "COSMIC_WATCH_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    pub username: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "COSMIC_WATCH_PASSWORD", hide_env_values = true)]
    pub password: String,
}
