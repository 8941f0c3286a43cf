use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `plg list`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let roots = ctx.db.list_root_decisions().await?;
    output(&roots, flags.format)
}
