use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use plg_core::enums::ExportFormat;
use plg_core::responses::{CollectResponse, ExpandResponse, ExportResponse, SummaryResponse};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LaunchArgs;
use crate::commands::collect::collect_from_stdin;
use crate::commands::expand::run_expansion;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Everything one `plg launch` session produced.
#[derive(Debug, Serialize)]
pub struct LaunchResponse {
    pub collected: CollectResponse,
    pub summary: SummaryResponse,
    pub expansion: ExpandResponse,
    pub export: Option<ExportResponse>,
}

/// Handle `plg launch`: collect, summarise, expand, and optionally export
/// into the sessions directory.
pub async fn handle(args: &LaunchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let export_format = args
        .export
        .as_deref()
        .map(|raw| parse_enum::<ExportFormat>(raw, "export format"))
        .transpose()?;

    // Fail on a missing API key before asking any questions.
    let oracle = ctx.oracle()?;

    let collected = collect_from_stdin(&ctx.db, &args.answers).await?;
    let root_id = collected.decision.id;

    let summary = with_spinner(
        "Summarizing context",
        plg_engine::summarize_decision(&ctx.db, oracle.as_ref(), root_id),
    )
    .await?;

    let depth = ctx.depth_or_default(args.depth);
    let children = ctx.children_or_default(args.children);
    let expansion = run_expansion(ctx, oracle.as_ref(), root_id, depth, children, flags).await?;

    let export = match export_format {
        Some(format) => {
            let path = session_export_path(&ctx.config.general.sessions_dir(), format, Local::now());
            Some(plg_export::export_to_file(&ctx.db, root_id, &path, format).await?)
        }
        None => None,
    };

    tracing::info!(root_id, depth, children, "session finished");
    output(
        &LaunchResponse {
            collected,
            summary,
            expansion,
            export,
        },
        flags.format,
    )
}

/// `<sessions_dir>/session_<YYYYmmdd_HHMMSS>.<md|mmd>`
pub fn session_export_path(sessions_dir: &Path, format: ExportFormat, now: DateTime<Local>) -> PathBuf {
    sessions_dir.join(format!(
        "session_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        format.extension()
    ))
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use chrono::{Local, TimeZone};
    use plg_core::enums::ExportFormat;
    use pretty_assertions::assert_eq;

    use super::session_export_path;

    #[test]
    fn session_path_is_timestamped_with_format_extension() {
        let now = Local
            .with_ymd_and_hms(2026, 3, 9, 14, 5, 7)
            .single()
            .expect("unambiguous local time");

        assert_eq!(
            session_export_path(Path::new("/tmp/sessions"), ExportFormat::Markdown, now),
            PathBuf::from("/tmp/sessions/session_20260309_140507.md")
        );
        assert_eq!(
            session_export_path(Path::new("/tmp/sessions"), ExportFormat::Mermaid, now),
            PathBuf::from("/tmp/sessions/session_20260309_140507.mmd")
        );
    }
}
