//! Cross-cutting error types.
//!
//! Domain-specific errors (`DatabaseError`, `OracleError`, `ExpandError`)
//! live in their respective crates. They converge into `anyhow` in `plg-cli`.

use thiserror::Error;

/// Errors that can be raised by any plg crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    #[must_use]
    pub fn decision_not_found(id: i64) -> Self {
        Self::NotFound {
            entity_type: "decision".to_string(),
            id: id.to_string(),
        }
    }
}
