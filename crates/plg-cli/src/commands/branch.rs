use crate::cli::GlobalFlags;
use crate::cli::root_commands::BranchArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Handle `plg branch`: one generation round under the decision's node.
pub async fn handle(args: &BranchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let oracle = ctx.oracle()?;
    let response = with_spinner(
        "Generating branches",
        plg_engine::branch_decision(&ctx.db, oracle.as_ref(), args.id, args.children as usize),
    )
    .await?;

    if response.created.is_empty() && !flags.quiet {
        eprintln!("No branches were generated for Decision ID {}.", args.id);
    }
    output(&response, flags.format)
}
