//! Decision repository.

use chrono::Utc;

use plg_core::entities::{ContextBlock, Decision};

use crate::PlgDb;
use crate::error::DatabaseError;
use crate::helpers::{decode_json, get_opt_string, parse_datetime};

pub(crate) const DECISION_COLUMNS: &str = "id, text, summary, tags, tradeoffs, created_at";

pub(crate) fn row_to_decision(row: &libsql::Row) -> Result<Decision, DatabaseError> {
    Ok(Decision {
        id: row.get::<i64>(0)?,
        text: row.get::<String>(1)?,
        summary: get_opt_string(row, 2)?,
        tags: decode_json(get_opt_string(row, 3)?.as_deref())?,
        tradeoffs: decode_json(get_opt_string(row, 4)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl PlgDb {
    /// Insert a bare decision with no tags, tradeoffs, or summary.
    pub async fn create_decision(&self, text: &str) -> Result<Decision, DatabaseError> {
        let now = Utc::now();
        self.conn
            .execute(
                "INSERT INTO decisions (text, created_at) VALUES (?1, ?2)",
                libsql::params![text, now.to_rfc3339()],
            )
            .await?;

        Ok(Decision {
            id: self.conn.last_insert_rowid(),
            text: text.to_string(),
            summary: None,
            tags: None,
            tradeoffs: None,
            created_at: now,
        })
    }

    /// Insert a root decision together with its context blocks in one
    /// transaction. `blocks` are `(role, text)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any insert fails; nothing is persisted then.
    pub async fn create_decision_with_context(
        &self,
        text: &str,
        blocks: &[(String, String)],
    ) -> Result<(Decision, Vec<ContextBlock>), DatabaseError> {
        let tx = self.conn.transaction().await?;
        match insert_with_context(&tx, text, blocks).await {
            Ok(created) => {
                tx.commit().await?;
                tracing::debug!(decision_id = created.0.id, blocks = blocks.len(), "root decision created");
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

    pub async fn get_decision(&self, id: i64) -> Result<Option<Decision>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT {DECISION_COLUMNS} FROM decisions WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_decision(&row)?)),
            None => Ok(None),
        }
    }

    /// Attach a summary to a decision that has none yet.
    ///
    /// Returns `true` if the summary was written, `false` if one was already
    /// cached (the existing value is kept).
    pub async fn set_decision_summary(&self, id: i64, summary: &str) -> Result<bool, DatabaseError> {
        let changed = self
            .conn
            .execute(
                "UPDATE decisions SET summary = ?1 WHERE id = ?2 AND (summary IS NULL OR summary = '')",
                libsql::params![summary, id],
            )
            .await?;
        Ok(changed > 0)
    }

    /// Decisions that are not placed under a parent, newest first.
    pub async fn list_root_decisions(&self) -> Result<Vec<Decision>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!(
                    "SELECT {DECISION_COLUMNS} FROM decisions d
                     WHERE NOT EXISTS (
                         SELECT 1 FROM branch_nodes b
                         WHERE b.decision_id = d.id AND b.parent_id IS NOT NULL
                     )
                     ORDER BY d.id DESC"
                ),
                (),
            )
            .await?;

        let mut decisions = Vec::new();
        while let Some(row) = rows.next().await? {
            decisions.push(row_to_decision(&row)?);
        }
        Ok(decisions)
    }
}

async fn insert_with_context(
    conn: &libsql::Connection,
    text: &str,
    blocks: &[(String, String)],
) -> Result<(Decision, Vec<ContextBlock>), DatabaseError> {
    let now = Utc::now();
    conn.execute(
        "INSERT INTO decisions (text, created_at) VALUES (?1, ?2)",
        libsql::params![text, now.to_rfc3339()],
    )
    .await?;
    let decision_id = conn.last_insert_rowid();

    let mut created = Vec::with_capacity(blocks.len());
    for (role, block_text) in blocks {
        conn.execute(
            "INSERT INTO context_blocks (role, text, decision_id) VALUES (?1, ?2, ?3)",
            libsql::params![role.as_str(), block_text.as_str(), decision_id],
        )
        .await?;
        created.push(ContextBlock {
            id: conn.last_insert_rowid(),
            role: role.clone(),
            text: block_text.clone(),
            decision_id: Some(decision_id),
        });
    }

    let decision = Decision {
        id: decision_id,
        text: text.to_string(),
        summary: None,
        tags: None,
        tradeoffs: None,
        created_at: now,
    };
    Ok((decision, created))
}
