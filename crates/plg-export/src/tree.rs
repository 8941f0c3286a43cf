//! In-memory snapshot of a persisted subtree.
//!
//! Loaded once with explicit child queries, then handed to the pure
//! renderers. Nodes without a decision are left out.

use std::collections::{HashSet, VecDeque};

use plg_core::entities::{BranchNode, Decision};
use plg_core::errors::CoreError;
use plg_db::PlgDb;

use crate::error::ExportError;

#[derive(Debug, Clone)]
pub struct TreeEntry {
    pub node: BranchNode,
    pub decision: Decision,
    /// Indices into [`ExportTree::entries`], in creation order.
    pub children: Vec<usize>,
}

/// Arena of entries in breadth-first order; the start node is entry 0.
#[derive(Debug, Clone)]
pub struct ExportTree {
    entries: Vec<TreeEntry>,
}

impl ExportTree {
    /// Load the subtree placed under `decision_id`.
    ///
    /// # Errors
    ///
    /// `ExportError::Core` when the decision is missing, `NotPlaced` when it
    /// has no branch node, or a database error.
    pub async fn load(db: &PlgDb, decision_id: i64) -> Result<Self, ExportError> {
        let start_decision = db
            .get_decision(decision_id)
            .await?
            .ok_or_else(|| CoreError::decision_not_found(decision_id))?;
        let start = db
            .find_branch_node_by_decision(decision_id)
            .await?
            .ok_or(ExportError::NotPlaced { decision_id })?;

        let mut entries = vec![TreeEntry {
            node: start,
            decision: start_decision,
            children: Vec::new(),
        }];
        let mut visited = HashSet::from([start.id]);
        let mut queue = VecDeque::from([0_usize]);

        while let Some(parent_idx) = queue.pop_front() {
            let parent_id = entries[parent_idx].node.id;
            for child in db.get_children(parent_id).await? {
                if !visited.insert(child.id) {
                    continue;
                }
                let Some(child_decision_id) = child.decision_id else {
                    continue;
                };
                let Some(decision) = db.get_decision(child_decision_id).await? else {
                    continue;
                };
                entries.push(TreeEntry {
                    node: child,
                    decision,
                    children: Vec::new(),
                });
                let idx = entries.len() - 1;
                entries[parent_idx].children.push(idx);
                queue.push_back(idx);
            }
        }

        tracing::debug!(decision_id, nodes = entries.len(), "tree loaded for export");
        Ok(Self { entries })
    }

    /// Build a tree from already-loaded entries. `entries[0]` is the start.
    #[must_use]
    pub const fn from_entries(entries: Vec<TreeEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn root(&self) -> Option<&TreeEntry> {
        self.entries.first()
    }

    #[must_use]
    pub fn entry(&self, idx: usize) -> Option<&TreeEntry> {
        self.entries.get(idx)
    }

    #[must_use]
    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Children of `entry`, skipping indices that do not resolve.
    pub fn children_of<'a>(&'a self, entry: &'a TreeEntry) -> impl Iterator<Item = &'a TreeEntry> + 'a {
        entry.children.iter().filter_map(|&idx| self.entry(idx))
    }
}
