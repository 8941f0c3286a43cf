//! Shared test utilities for plg-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use crate::PlgDb;

    /// In-memory database with the schema applied.
    pub async fn test_db() -> PlgDb {
        PlgDb::open_local(":memory:").await.unwrap()
    }

    /// Two `(role, text)` context pairs for root decisions.
    pub fn sample_context() -> Vec<(String, String)> {
        vec![
            (
                "current_situation".to_string(),
                "Working in finance, feeling stuck".to_string(),
            ),
            (
                "ideal_outcome".to_string(),
                "Meaningful creative work".to_string(),
            ),
        ]
    }
}
