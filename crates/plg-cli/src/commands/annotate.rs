use crate::cli::GlobalFlags;
use crate::cli::root_commands::DecisionArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Handle `plg annotate`. Tags are printed, not stored.
pub async fn handle(args: &DecisionArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let oracle = ctx.oracle()?;
    let response = with_spinner(
        "Annotating decision",
        plg_engine::annotate_decision(&ctx.db, oracle.as_ref(), args.id),
    )
    .await?;
    output(&response, flags.format)
}
