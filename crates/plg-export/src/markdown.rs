//! Markdown renderer: nested bullets with tags and tradeoffs.

use std::fmt::Write;

use crate::tree::{ExportTree, TreeEntry};

#[must_use]
pub fn render_markdown(tree: &ExportTree) -> String {
    let Some(root) = tree.root() else {
        return String::new();
    };

    let mut out = String::new();
    let start_id = root.node.decision_id.unwrap_or(root.decision.id);
    let _ = write!(
        out,
        "# Decision Tree Export\n\nStarting from Decision ID: {start_id}\n\n"
    );
    write_entry(tree, root, 0, &mut out);
    out
}

fn write_entry(tree: &ExportTree, entry: &TreeEntry, level: usize, out: &mut String) {
    let indent = "  ".repeat(level);
    let decision = &entry.decision;
    let tags = decision.tags.clone().unwrap_or_default();

    let _ = writeln!(
        out,
        "{indent}- **Decision (ID: {})**: {}",
        decision.id, decision.text
    );
    let _ = writeln!(out, "{indent}  - *Tags: {}*", tags.display_line());
    if let Some(tradeoffs) = decision.tradeoffs.as_ref().filter(|t| !t.is_empty()) {
        let _ = writeln!(out, "{indent}  - *Tradeoffs:* {}", tradeoffs.join("; "));
    }

    for child in tree.children_of(entry) {
        write_entry(tree, child, level + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_fixtures::sample_tree;

    #[test]
    fn renders_nested_bullets() {
        let expected = "\
# Decision Tree Export

Starting from Decision ID: 1

- **Decision (ID: 1)**: Initial context collected.
  - *Tags: [Risk: N/A] [Growth: N/A] [Emotion: N/A]*
  - **Decision (ID: 2)**: Open a \"tiny\" bakery
    - *Tags: [Risk: High] [Growth: High] [Emotion: Energized]*
    - *Tradeoffs:* + Creative work; - Early mornings
    - **Decision (ID: 4)**: Expand to catering
      - *Tags: [Risk: Medium] [Growth: N/A] [Emotion: N/A]*
  - **Decision (ID: 3)**: Stay and negotiate remote work
    - *Tags: [Risk: N/A] [Growth: N/A] [Emotion: N/A]*
";
        assert_eq!(render_markdown(&sample_tree()), expected);
    }

    #[test]
    fn empty_tree_renders_nothing() {
        assert_eq!(render_markdown(&ExportTree::from_entries(Vec::new())), "");
    }
}
