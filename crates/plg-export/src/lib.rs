//! # plg-export
//!
//! Read-only renderers for persisted decision trees: Markdown, Mermaid, and
//! a plain console tree. Tags and tradeoffs come from the stored decision
//! columns; nothing here calls the oracle.

pub mod console;
pub mod error;
pub mod markdown;
pub mod mermaid;
pub mod tree;

pub use console::render_console;
pub use error::ExportError;
pub use markdown::render_markdown;
pub use mermaid::render_mermaid;
pub use tree::{ExportTree, TreeEntry};

use std::path::Path;

use plg_core::enums::ExportFormat;
use plg_core::responses::ExportResponse;
use plg_db::PlgDb;

/// Render `tree` in the given file format.
#[must_use]
pub fn render(tree: &ExportTree, format: ExportFormat) -> String {
    match format {
        ExportFormat::Markdown => render_markdown(tree),
        ExportFormat::Mermaid => render_mermaid(tree),
    }
}

/// Load the tree under `decision_id` and write it to `path`, creating
/// parent directories as needed.
///
/// # Errors
///
/// `ExportError` when the decision is missing or unplaced, the store fails,
/// or the file cannot be written.
pub async fn export_to_file(
    db: &PlgDb,
    decision_id: i64,
    path: &Path,
    format: ExportFormat,
) -> Result<ExportResponse, ExportError> {
    let tree = ExportTree::load(db, decision_id).await?;
    let content = render(&tree, format);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| ExportError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
    }
    tokio::fs::write(path, &content)
        .await
        .map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(decision_id, path = %path.display(), format = format.as_str(), "tree exported");
    Ok(ExportResponse {
        decision_id,
        format,
        path: path.to_path_buf(),
        bytes: content.len(),
    })
}
