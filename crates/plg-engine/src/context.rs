//! Resolution of the context a tree is generated against.

use plg_core::entities::{BranchNode, ContextBlock};
use plg_db::PlgDb;

use crate::error::EngineError;

/// Context blocks of the tree root above `node`.
///
/// Every generation call in a tree reuses the root's original context,
/// whatever the depth of the parent being expanded.
pub async fn tree_context(db: &PlgDb, node: &BranchNode) -> Result<Vec<ContextBlock>, EngineError> {
    let chain = db.ancestor_chain(node.id).await?;
    let root = chain.last().unwrap_or(node);
    match root.decision_id {
        Some(decision_id) => Ok(db.get_context_blocks(decision_id).await?),
        None => Ok(Vec::new()),
    }
}
