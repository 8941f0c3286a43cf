//! Context block repository.

use plg_core::entities::ContextBlock;

use crate::PlgDb;
use crate::error::DatabaseError;

fn row_to_context_block(row: &libsql::Row) -> Result<ContextBlock, DatabaseError> {
    Ok(ContextBlock {
        id: row.get::<i64>(0)?,
        role: row.get::<String>(1)?,
        text: row.get::<String>(2)?,
        decision_id: row.get::<Option<i64>>(3)?,
    })
}

impl PlgDb {
    /// Context blocks attached to a decision, in insertion order.
    pub async fn get_context_blocks(
        &self,
        decision_id: i64,
    ) -> Result<Vec<ContextBlock>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                "SELECT id, role, text, decision_id FROM context_blocks
                 WHERE decision_id = ?1 ORDER BY id",
                [decision_id],
            )
            .await?;

        let mut blocks = Vec::new();
        while let Some(row) = rows.next().await? {
            blocks.push(row_to_context_block(&row)?);
        }
        Ok(blocks)
    }
}
