//! Engine error types.

use plg_core::errors::CoreError;
use plg_db::DatabaseError;
use plg_llm::OracleError;
use thiserror::Error;

/// Errors from engine operations.
///
/// Malformed oracle output is never an error here; it degrades to empty
/// results. Only missing entities, transport failures, and storage
/// failures surface.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A referenced decision does not exist.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The oracle call itself failed.
    #[error("oracle call failed: {0}")]
    Oracle(#[from] OracleError),

    /// The tree store failed.
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),
}

impl EngineError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Core(CoreError::NotFound { .. }))
    }
}
