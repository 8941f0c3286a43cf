//! Plain-text tree for terminal display.

use crate::tree::{ExportTree, TreeEntry};

/// Render the tree with `├──` / `└──` connectors. The start node also
/// shows its cached summary, when one exists.
#[must_use]
pub fn render_console(tree: &ExportTree) -> String {
    let Some(root) = tree.root() else {
        return String::new();
    };

    let mut lines = vec![format!(
        "Decision Tree starting from Decision ID: {}",
        root.decision.id
    )];
    write_entry(tree, root, "", true, true, &mut lines);
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn write_entry(
    tree: &ExportTree,
    entry: &TreeEntry,
    prefix: &str,
    last: bool,
    is_start: bool,
    lines: &mut Vec<String>,
) {
    let connector = if last { "└── " } else { "├── " };
    let continuation = format!("{prefix}{}", if last { "    " } else { "│   " });
    let decision = &entry.decision;

    lines.push(format!(
        "{prefix}{connector}Decision (ID: {}): {}",
        decision.id, decision.text
    ));
    if is_start && let Some(summary) = decision.summary.as_deref() {
        lines.push(format!("{continuation}Summary: {summary}"));
    }
    lines.push(format!(
        "{continuation}Tags: {}",
        decision.tags.clone().unwrap_or_default().display_line()
    ));

    let children: Vec<&TreeEntry> = tree.children_of(entry).collect();
    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        write_entry(tree, child, &continuation, i + 1 == count, false, lines);
    }
}
