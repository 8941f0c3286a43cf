//! Mermaid `graph TD` renderer.
//!
//! Node ids are `D{decision_id}`; lines are deduplicated and sorted so the
//! output is stable for a given tree.

use std::collections::BTreeSet;

use crate::tree::ExportTree;

#[must_use]
pub fn render_mermaid(tree: &ExportTree) -> String {
    let mut lines = BTreeSet::new();

    for entry in tree.entries() {
        let decision = &entry.decision;
        let tags = decision.tags.clone().unwrap_or_default();
        let node_id = format!("D{}", decision.id);
        lines.insert(format!(
            "    {node_id}[\"{}<br/>{}\"]",
            escape_label(&decision.text),
            tags.display_line()
        ));
        for child in tree.children_of(entry) {
            lines.insert(format!("    {node_id} --> D{}", child.decision.id));
        }
    }

    let body = lines.into_iter().collect::<Vec<_>>().join("\n");
    format!("graph TD\n{body}\n")
}

/// Quotes end a Mermaid label; they become the `#quot;` entity.
fn escape_label(text: &str) -> String {
    text.replace('"', "#quot;")
}
