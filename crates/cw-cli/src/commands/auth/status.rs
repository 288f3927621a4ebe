use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    api: String,
    data_dir: String,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(
        &AuthStatusResponse {
            authenticated: ctx.session.is_authenticated(),
            api: ctx.config.api.base_url.clone(),
            data_dir: ctx.data_dir.display().to_string(),
        },
        flags.format,
    )
}
