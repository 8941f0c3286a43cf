//! Annotator: qualitative tags for one decision text.

use plg_core::errors::CoreError;
use plg_core::responses::AnnotateResponse;
use plg_core::tags::TagRecord;
use plg_db::PlgDb;
use plg_llm::Oracle;

use crate::error::EngineError;
use crate::parse::parse_lenient;
use crate::prompts::tag_prompt;

/// Tag a decision text. Never fails: oracle errors, missing content, and
/// malformed JSON all give [`TagRecord::empty`].
pub async fn annotate(oracle: &dyn Oracle, text: &str) -> TagRecord {
    let completion = match oracle.complete(&tag_prompt(text)).await {
        Ok(completion) => completion,
        Err(error) => {
            tracing::warn!(%error, "annotation failed, using empty tags");
            return TagRecord::empty();
        }
    };

    let Some(content) = completion.trimmed() else {
        return TagRecord::empty();
    };

    parse_lenient::<TagRecord>(content)
        .map(normalize)
        .unwrap_or_else(|| {
            tracing::debug!("annotation was not a tag object");
            TagRecord::empty()
        })
}

/// Annotate a stored decision's text without persisting the tags.
///
/// # Errors
///
/// `CoreError::NotFound` for a missing decision, or a storage failure.
pub async fn annotate_decision(
    db: &PlgDb,
    oracle: &dyn Oracle,
    decision_id: i64,
) -> Result<AnnotateResponse, EngineError> {
    let decision = db
        .get_decision(decision_id)
        .await?
        .ok_or_else(|| CoreError::decision_not_found(decision_id))?;
    let tags = annotate(oracle, &decision.text).await;
    Ok(AnnotateResponse { decision_id, tags })
}

/// Blank labels count as missing.
fn normalize(tags: TagRecord) -> TagRecord {
    let clean = |value: Option<String>| {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };
    TagRecord {
        risk: clean(tags.risk),
        growth: clean(tags.growth),
        emotion: clean(tags.emotion),
    }
}
