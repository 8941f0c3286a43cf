//! Context summarizer with a per-decision cache.

use plg_core::entities::ContextBlock;
use plg_core::errors::CoreError;
use plg_core::responses::SummaryResponse;
use plg_db::PlgDb;
use plg_llm::{Oracle, OracleError};

use crate::error::EngineError;
use crate::prompts::{format_context, summary_prompt};

/// Returned when the oracle answers without usable text.
pub const SUMMARY_FALLBACK: &str = "No summary could be generated.";

/// Synthesize context blocks into one summary string.
///
/// # Errors
///
/// Oracle failures propagate.
pub async fn summarize(oracle: &dyn Oracle, blocks: &[ContextBlock]) -> Result<String, OracleError> {
    let prompt = summary_prompt(&format_context(blocks));
    let completion = oracle.complete(&prompt).await?;
    Ok(completion
        .trimmed()
        .map_or_else(|| SUMMARY_FALLBACK.to_string(), str::to_string))
}

/// Summary for a decision, computed once and cached on the decision.
///
/// A decision without context summarizes to its own text and nothing is
/// cached for it.
///
/// # Errors
///
/// `CoreError::NotFound` for a missing decision; oracle and storage
/// failures propagate.
pub async fn summarize_decision(
    db: &PlgDb,
    oracle: &dyn Oracle,
    decision_id: i64,
) -> Result<SummaryResponse, EngineError> {
    let decision = db
        .get_decision(decision_id)
        .await?
        .ok_or_else(|| CoreError::decision_not_found(decision_id))?;

    if let Some(summary) = decision.summary.filter(|s| !s.trim().is_empty()) {
        tracing::debug!(decision_id, "summary served from cache");
        return Ok(SummaryResponse {
            decision_id,
            summary,
            cached: true,
        });
    }

    let blocks = db.get_context_blocks(decision_id).await?;
    if blocks.is_empty() {
        return Ok(SummaryResponse {
            decision_id,
            summary: decision.text,
            cached: false,
        });
    }

    let summary = summarize(oracle, &blocks).await?;
    db.set_decision_summary(decision_id, &summary).await?;
    tracing::info!(decision_id, blocks = blocks.len(), "summary generated");

    Ok(SummaryResponse {
        decision_id,
        summary,
        cached: false,
    })
}
