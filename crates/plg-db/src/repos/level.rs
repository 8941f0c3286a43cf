//! Level commit: persist one BFS level of generated branches atomically.

use chrono::Utc;

use plg_core::entities::{BranchNode, Decision};
use plg_core::responses::CreatedBranch;
use plg_core::tags::TagRecord;
use plg_core::tradeoff::retain_polarized;

use crate::PlgDb;
use crate::error::DatabaseError;
use crate::helpers::encode_json;

/// A generated child waiting to be committed under an existing node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBranch {
    pub parent_node_id: i64,
    pub text: String,
    pub tradeoffs: Vec<String>,
    pub tags: TagRecord,
}

impl PlgDb {
    /// Insert a decision and a branch node for every staged branch, all in
    /// one transaction. Returns the created rows in input order.
    ///
    /// Tradeoffs without a `+`/`-` prefix are dropped before insert.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any insert fails. The transaction is
    /// rolled back and none of the level is persisted.
    pub async fn commit_level(
        &self,
        branches: &[NewBranch],
    ) -> Result<Vec<CreatedBranch>, DatabaseError> {
        if branches.is_empty() {
            return Ok(Vec::new());
        }

        let tx = self.conn.transaction().await?;
        match insert_branches(&tx, branches).await {
            Ok(created) => {
                tx.commit().await?;
                tracing::debug!(committed = created.len(), "level committed");
                Ok(created)
            }
            Err(error) => {
                if let Err(rollback) = tx.rollback().await {
                    tracing::warn!(%rollback, "rollback failed");
                }
                Err(error)
            }
        }
    }
}

async fn insert_branches(
    conn: &libsql::Connection,
    branches: &[NewBranch],
) -> Result<Vec<CreatedBranch>, DatabaseError> {
    let mut created = Vec::with_capacity(branches.len());

    for branch in branches {
        let now = Utc::now();
        let tradeoffs = retain_polarized(&branch.tradeoffs);
        conn.execute(
            "INSERT INTO decisions (text, tags, tradeoffs, created_at) VALUES (?1, ?2, ?3, ?4)",
            libsql::params![
                branch.text.as_str(),
                encode_json(&branch.tags)?,
                encode_json(&tradeoffs)?,
                now.to_rfc3339()
            ],
        )
        .await?;
        let decision_id = conn.last_insert_rowid();

        conn.execute(
            "INSERT INTO branch_nodes (decision_id, parent_id) VALUES (?1, ?2)",
            libsql::params![decision_id, branch.parent_node_id],
        )
        .await?;

        created.push(CreatedBranch {
            node: BranchNode {
                id: conn.last_insert_rowid(),
                decision_id: Some(decision_id),
                parent_id: Some(branch.parent_node_id),
            },
            decision: Decision {
                id: decision_id,
                text: branch.text.clone(),
                summary: None,
                tags: Some(branch.tags.clone()),
                tradeoffs: Some(tradeoffs),
                created_at: now,
            },
        });
    }
    Ok(created)
}
