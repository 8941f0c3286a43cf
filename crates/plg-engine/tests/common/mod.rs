//! Shared fixtures for engine integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use plg_core::entities::Decision;
use plg_db::PlgDb;
use plg_llm::testing::FnOracle;
use plg_llm::{Completion, OracleError};

pub const TAGS_JSON: &str = r#"{"risk": "Medium", "growth": "High", "emotion": "Hopeful"}"#;

pub fn is_tag_prompt(prompt: &str) -> bool {
    prompt.contains("assign it tags")
}

pub fn is_summary_prompt(prompt: &str) -> bool {
    prompt.contains("synthesize the following points")
}

pub fn is_branch_prompt(prompt: &str) -> bool {
    prompt.contains("brainstorm the next set")
}

pub async fn test_db() -> PlgDb {
    PlgDb::open_local(":memory:").await.unwrap()
}

/// Root decision with two context blocks, as `plg collect` creates it.
pub async fn seeded_root(db: &PlgDb) -> Decision {
    let blocks = vec![
        (
            "current_situation".to_string(),
            "Accountant in a big firm, restless".to_string(),
        ),
        (
            "ideal_outcome".to_string(),
            "Own a small business".to_string(),
        ),
    ];
    db.create_decision_with_context("Initial context collected.", &blocks)
        .await
        .unwrap()
        .0
}

/// JSON array of `n` branches with unique texts drawn from `counter`.
pub fn branches_json(n: usize, counter: &AtomicUsize) -> String {
    let items: Vec<String> = (0..n)
        .map(|_| {
            let id = counter.fetch_add(1, Ordering::SeqCst);
            format!(
                r#"{{"decision": "Path {id}", "tradeoffs": ["+ Upside {id}", "sideways {id}", "- Downside {id}"]}}"#
            )
        })
        .collect();
    format!("[{}]", items.join(", "))
}

/// Oracle answering branch prompts with `per_call` branches, tag prompts
/// with a full tag record, and summary prompts with a fixed summary.
pub fn fan_out_oracle(
    per_call: usize,
) -> FnOracle<impl Fn(&str) -> Result<Completion, OracleError> + Send + Sync> {
    let counter = AtomicUsize::new(0);
    FnOracle::new(move |prompt: &str| {
        if is_tag_prompt(prompt) {
            Ok(Completion::text(TAGS_JSON))
        } else if is_summary_prompt(prompt) {
            Ok(Completion::text("Wants to leave accounting for a business"))
        } else {
            Ok(Completion::text(branches_json(per_call, &counter)))
        }
    })
}
