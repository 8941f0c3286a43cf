//! Export error types.

use std::path::PathBuf;

use plg_core::errors::CoreError;
use plg_db::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The start decision does not exist.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The decision exists but was never placed in a tree.
    #[error(
        "No branch data found for Decision ID {decision_id}. Try running 'plg branch' or 'plg expand' first."
    )]
    NotPlaced { decision_id: i64 },

    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
