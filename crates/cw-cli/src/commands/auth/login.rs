use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    username: String,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.auth
        .login(&ctx.session, &args.username, &args.password)
        .await
        .map_err(|error| super::user_facing("login", &error))?;

    output(
        &AuthLoginResponse {
            authenticated: ctx.session.is_authenticated(),
            username: args.username.clone(),
        },
        flags.format,
    )
}
