//! Deterministic oracles for tests and offline runs.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::{Completion, Oracle, OracleError};

/// An oracle that answers every prompt with a closure and records the
/// prompts it received.
pub struct FnOracle<F> {
    respond: F,
    prompts: Mutex<Vec<String>>,
}

impl<F> FnOracle<F>
where
    F: Fn(&str) -> Result<Completion, OracleError> + Send + Sync,
{
    pub const fn new(respond: F) -> Self {
        Self {
            respond,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().map(|prompts| prompts.len()).unwrap_or(0)
    }
}

#[async_trait]
impl<F> Oracle for FnOracle<F>
where
    F: Fn(&str) -> Result<Completion, OracleError> + Send + Sync,
{
    async fn complete(&self, prompt: &str) -> Result<Completion, OracleError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        (self.respond)(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_prompts_in_order() {
        let oracle = FnOracle::new(|prompt| Ok(Completion::text(prompt.to_uppercase())));

        let first = oracle.complete("one").await.unwrap();
        oracle.complete("two").await.unwrap();

        assert_eq!(first.content.as_deref(), Some("ONE"));
        assert_eq!(oracle.prompts(), vec!["one", "two"]);
        assert_eq!(oracle.calls(), 2);
    }

    #[tokio::test]
    async fn passes_errors_through() {
        let oracle = FnOracle::new(|_| {
            Err(OracleError::Api {
                status: 503,
                message: "overloaded".into(),
            })
        });
        assert!(matches!(
            oracle.complete("x").await,
            Err(OracleError::Api { status: 503, .. })
        ));
    }
}
