use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The placement of a [`Decision`](super::Decision) inside a tree.
///
/// Children are never stored on the node; they are derived by querying
/// for nodes whose `parent_id` equals this node's `id`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct BranchNode {
    pub id: i64,
    pub decision_id: Option<i64>,
    pub parent_id: Option<i64>,
}

impl BranchNode {
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
