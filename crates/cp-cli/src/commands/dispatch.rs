use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Home => commands::home::handle(ctx, flags),
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Children { action } => commands::children::handle(&action, ctx, flags).await,
        Commands::Plans { action } => commands::plans::handle(&action, ctx, flags).await,
        Commands::Visits { action } => commands::visits::handle(&action, ctx, flags).await,
        Commands::Messages { action } => commands::messages::handle(&action, ctx, flags).await,
        Commands::Journal { action } => commands::journal::handle(&action, ctx, flags).await,
    }
}
