use plg_core::responses::ExpandResponse;
use plg_engine::Expander;
use plg_llm::Oracle;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExpandArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Handle `plg expand`.
pub async fn handle(args: &ExpandArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let depth = ctx.depth_or_default(args.depth);
    let children = ctx.children_or_default(args.children);
    let oracle = ctx.oracle()?;
    let response = run_expansion(ctx, oracle.as_ref(), args.id, depth, children, flags).await?;
    output(&response, flags.format)
}

/// Expand under a spinner and tell the user when the node budget cut the
/// run short.
pub async fn run_expansion(
    ctx: &AppContext,
    oracle: &dyn Oracle,
    decision_id: i64,
    depth: u32,
    children: usize,
    flags: &GlobalFlags,
) -> anyhow::Result<ExpandResponse> {
    let expander = Expander::new(&ctx.db, oracle);
    let outcome = with_spinner(
        "Expanding decision tree",
        expander.expand(decision_id, depth, children),
    )
    .await?;

    let response = outcome.into_response();
    if response.stopped_early && !flags.quiet {
        eprintln!(
            "Generation stopped early: the tree reached the {}-node limit.",
            response.report.max_nodes
        );
    }
    Ok(response)
}
