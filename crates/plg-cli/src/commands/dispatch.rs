use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Collect(args) => commands::collect::handle(&args, ctx, flags).await,
        Commands::Summarise(args) => commands::summarise::handle(&args, ctx, flags).await,
        Commands::Branch(args) => commands::branch::handle(&args, ctx, flags).await,
        Commands::Annotate(args) => commands::annotate::handle(&args, ctx, flags).await,
        Commands::Expand(args) => commands::expand::handle(&args, ctx, flags).await,
        Commands::Export(args) => commands::export::handle(&args, ctx, flags).await,
        Commands::Show(args) => commands::show::handle(&args, ctx, flags).await,
        Commands::List => commands::list::handle(ctx, flags).await,
        Commands::Launch(args) => commands::launch::handle(&args, ctx, flags).await,
    }
}
