mod login;
mod logout;
mod register;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

/// Handle `cwatch auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, ctx, flags).await,
        AuthCommands::Register(args) => register::handle(args, ctx, flags).await,
        AuthCommands::Logout => logout::handle(ctx, flags),
        AuthCommands::Status => status::handle(ctx, flags),
    }
}

/// Turn an auth failure into the message shown to the user, keeping the
/// underlying cause in the debug log.
fn user_facing(action: &str, error: &cw_auth::AuthError) -> anyhow::Error {
    tracing::debug!(%error, action, "auth request failed");
    anyhow::anyhow!("{action} failed: {}", error.user_message())
}
