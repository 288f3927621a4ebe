use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthRegisterArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthRegisterResponse {
    registered: bool,
    username: String,
    note: &'static str,
}

pub async fn handle(
    args: &AuthRegisterArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.auth
        .register(&args.username, &args.email, &args.password)
        .await
        .map_err(|error| super::user_facing("registration", &error))?;

    output(
        &AuthRegisterResponse {
            registered: true,
            username: args.username.clone(),
            note: "run 'cwatch auth login' to sign in",
        },
        flags.format,
    )
}
