//! # plg-llm
//!
//! The completion oracle consumed by the tree-expansion engine.
//!
//! [`Oracle`] is the only seam the engine sees: one prompt in, one optional
//! text completion out. [`OpenAiClient`] talks to any OpenAI-compatible
//! `chat/completions` endpoint; [`testing::FnOracle`] answers from a closure
//! for tests and offline runs.

mod error;
mod factory;
mod openai;
pub mod testing;

pub use error::OracleError;
pub use factory::oracle_from_config;
pub use openai::OpenAiClient;

use async_trait::async_trait;

/// The text returned by one oracle call.
///
/// `content` is `None` when the provider answered without any text
/// (e.g. a tool call or an empty message).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    pub content: Option<String>,
}

impl Completion {
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self { content: None }
    }

    /// Content with surrounding whitespace removed, or `None` if blank.
    #[must_use]
    pub fn trimmed(&self) -> Option<&str> {
        self.content
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// A generative text oracle.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Complete a single user prompt.
    async fn complete(&self, prompt: &str) -> Result<Completion, OracleError>;
}
