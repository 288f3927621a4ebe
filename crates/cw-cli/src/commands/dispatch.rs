use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Feed(args) => commands::feed::handle(&args, ctx, flags).await,
        Commands::Stats => commands::stats::handle(ctx, flags).await,
        Commands::Detail(args) => commands::detail::handle(&args, ctx, flags).await,
        Commands::Watch { action } => commands::watch::handle(&action, ctx, flags).await,
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Monitor(args) => commands::monitor::handle(&args, ctx, flags).await,
        Commands::Risk(args) => commands::risk::handle(&args, flags),
    }
}
