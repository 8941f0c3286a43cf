use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::root_commands::DecisionArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ShowResponse {
    decision_id: i64,
    nodes: usize,
    tree: String,
}

/// Handle `plg show`. JSON output wraps the rendered tree; the other
/// formats print it as-is.
pub async fn handle(args: &DecisionArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tree = plg_export::ExportTree::load(&ctx.db, args.id).await?;
    let rendered = plg_export::render_console(&tree);

    if flags.format == OutputFormat::Json {
        return output(
            &ShowResponse {
                decision_id: args.id,
                nodes: tree.len(),
                tree: rendered,
            },
            flags.format,
        );
    }

    println!("{rendered}");
    Ok(())
}
