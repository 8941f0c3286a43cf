//! Branch node repository: tree placement of decisions.
//!
//! A node's children are always derived by query, never cached, so every
//! walker (exporters, console tree, tests) sees committed state only.

use std::collections::HashSet;

use plg_core::entities::BranchNode;

use crate::PlgDb;
use crate::error::DatabaseError;

const NODE_COLUMNS: &str = "id, decision_id, parent_id";

fn row_to_branch_node(row: &libsql::Row) -> Result<BranchNode, DatabaseError> {
    Ok(BranchNode {
        id: row.get::<i64>(0)?,
        decision_id: row.get::<Option<i64>>(1)?,
        parent_id: row.get::<Option<i64>>(2)?,
    })
}

impl PlgDb {
    pub async fn get_branch_node(&self, id: i64) -> Result<Option<BranchNode>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT {NODE_COLUMNS} FROM branch_nodes WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_branch_node(&row)?)),
            None => Ok(None),
        }
    }

    /// The node placing `decision_id`, if the decision has been placed.
    pub async fn find_branch_node_by_decision(
        &self,
        decision_id: i64,
    ) -> Result<Option<BranchNode>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT {NODE_COLUMNS} FROM branch_nodes WHERE decision_id = ?1"),
                [decision_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_branch_node(&row)?)),
            None => Ok(None),
        }
    }

    /// Look up the node for `decision_id`, creating a parentless one when
    /// the decision has not been placed yet.
    ///
    /// Repeated calls return the same node.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` when the decision does not exist;
    /// nothing is written in that case.
    pub async fn get_or_create_root_node(
        &self,
        decision_id: i64,
    ) -> Result<BranchNode, DatabaseError> {
        if let Some(node) = self.find_branch_node_by_decision(decision_id).await? {
            return Ok(node);
        }
        if self.get_decision(decision_id).await?.is_none() {
            return Err(DatabaseError::NoResult);
        }

        self.conn
            .execute(
                "INSERT INTO branch_nodes (decision_id, parent_id) VALUES (?1, NULL)",
                [decision_id],
            )
            .await?;
        let node = BranchNode {
            id: self.conn.last_insert_rowid(),
            decision_id: Some(decision_id),
            parent_id: None,
        };
        tracing::debug!(node_id = node.id, decision_id, "root node created");
        Ok(node)
    }

    /// Direct children of a node, in creation order.
    pub async fn get_children(&self, node_id: i64) -> Result<Vec<BranchNode>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT {NODE_COLUMNS} FROM branch_nodes WHERE parent_id = ?1 ORDER BY id"),
                [node_id],
            )
            .await?;

        let mut children = Vec::new();
        while let Some(row) = rows.next().await? {
            children.push(row_to_branch_node(&row)?);
        }
        Ok(children)
    }

    /// Total number of nodes in the store.
    pub async fn count_branch_nodes(&self) -> Result<u64, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT COUNT(*) FROM branch_nodes", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count).map_err(|e| DatabaseError::InvalidState(e.to_string()))
    }

    /// Number of nodes in the subtree rooted at `node_id`, the root included.
    pub async fn count_subtree_nodes(&self, node_id: i64) -> Result<u64, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                "WITH RECURSIVE subtree(id) AS (
                     SELECT id FROM branch_nodes WHERE id = ?1
                     UNION ALL
                     SELECT b.id FROM branch_nodes b JOIN subtree s ON b.parent_id = s.id
                 )
                 SELECT COUNT(*) FROM subtree",
                [node_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count).map_err(|e| DatabaseError::InvalidState(e.to_string()))
    }

    /// The chain from `node_id` up to its root, starting with the node itself.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if `node_id` or a parent along the
    /// chain is missing, and `DatabaseError::InvalidState` if the chain
    /// revisits a node.
    pub async fn ancestor_chain(&self, node_id: i64) -> Result<Vec<BranchNode>, DatabaseError> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut next = Some(node_id);

        while let Some(id) = next {
            if !seen.insert(id) {
                return Err(DatabaseError::InvalidState(format!(
                    "cycle in parent chain of node {node_id} at node {id}"
                )));
            }
            let node = self.get_branch_node(id).await?.ok_or(DatabaseError::NoResult)?;
            next = node.parent_id;
            chain.push(node);
        }
        Ok(chain)
    }
}
