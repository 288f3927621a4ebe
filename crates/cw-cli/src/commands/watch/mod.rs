mod add;
mod list;
mod remove;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::WatchCommands;
use crate::context::AppContext;

/// Handle `cwatch watch <subcommand>`.
pub async fn handle(
    action: &WatchCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        WatchCommands::Add { id } => add::handle(id, ctx, flags).await,
        WatchCommands::Remove { id } => remove::handle(id, ctx, flags),
        WatchCommands::List => list::handle(ctx, flags),
    }
}
