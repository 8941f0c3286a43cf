//! # plg-db
//!
//! libSQL tree store for the Parallel Life Generator.
//!
//! Holds decisions, the context blocks collected for a root decision, and
//! the branch nodes that link decisions into a tree. Children are never
//! stored on a node; they are derived with `WHERE parent_id = ?`.
//!
//! Uses the `libsql` crate (C `SQLite` fork) in local mode.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;

#[cfg(test)]
mod test_support;

pub use error::DatabaseError;
pub use repos::level::NewBranch;

use libsql::Builder;

/// Central database handle for tree state.
///
/// Constructed explicitly by the caller and passed by reference into the
/// engine and exporters.
pub struct PlgDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl PlgDb {
    /// Open a local database at the given path. `":memory:"` opens a
    /// throwaway in-memory database.
    ///
    /// Runs migrations automatically on every open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Foreign keys are per-connection in SQLite
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let plg_db = Self { db, conn };
        plg_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(plg_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> PlgDb {
        PlgDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for table in ["decisions", "context_blocks", "branch_nodes"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn unique_decision_index_exists() {
        let db = test_db().await;
        let mut rows = db
            .conn()
            .query(
                "SELECT sql FROM sqlite_master WHERE type='index' AND name='idx_branch_nodes_decision'",
                (),
            )
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        let sql = row.get::<String>(0).unwrap();
        assert!(sql.contains("UNIQUE"), "index should be unique: {sql}");
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO branch_nodes (decision_id, parent_id) VALUES (?1, NULL)",
                [4242_i64],
            )
            .await;
        assert!(result.is_err(), "dangling decision_id should be rejected");
    }

    #[tokio::test]
    async fn open_on_disk_persists_between_handles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plg.db");
        let path = path.to_str().unwrap();

        {
            let db = PlgDb::open_local(path).await.unwrap();
            db.create_decision("Stay put").await.unwrap();
        }

        let db = PlgDb::open_local(path).await.unwrap();
        let decision = db.get_decision(1).await.unwrap().unwrap();
        assert_eq!(decision.text, "Stay put");
    }
}
