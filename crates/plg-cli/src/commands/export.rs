use std::path::PathBuf;

use plg_core::enums::ExportFormat;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `plg export`.
pub async fn handle(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let format: ExportFormat = parse_enum(&args.file_format, "format")?;
    let path = PathBuf::from(&args.file);
    let response = plg_export::export_to_file(&ctx.db, args.id, &path, format).await?;
    output(&response, flags.format)
}
