//! Branch generator: ask the oracle for the next decisions after a parent.

use serde::Deserialize;

use plg_core::entities::ContextBlock;
use plg_core::responses::BranchResponse;
use plg_core::tradeoff::retain_polarized;
use plg_db::{NewBranch, PlgDb};
use plg_llm::{Oracle, OracleError};

use crate::annotate::annotate;
use crate::context::tree_context;
use crate::error::EngineError;
use crate::parse::parse_lenient;
use crate::prompts::{branch_prompt, format_context};
use crate::summarize::summarize_decision;

/// One proposed child decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchCandidate {
    pub text: String,
    /// Entries carrying a `+`/`-` prefix, in oracle order.
    pub tradeoffs: Vec<String>,
}

/// Why a generation round produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The oracle returned no text.
    NoContent,
    /// The text was neither a JSON array nor contained one in a fenced block.
    Unparseable,
    /// The array parsed but held no usable candidate.
    NoCandidates,
}

/// Result of one generation round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchOutcome {
    Branches(Vec<BranchCandidate>),
    Empty(EmptyReason),
}

impl BranchOutcome {
    /// Candidates, or an empty vec for an empty outcome.
    #[must_use]
    pub fn into_candidates(self) -> Vec<BranchCandidate> {
        match self {
            Self::Branches(candidates) => candidates,
            Self::Empty(_) => Vec::new(),
        }
    }
}

#[derive(Deserialize)]
struct RawBranch {
    #[serde(default)]
    decision: String,
    #[serde(default)]
    tradeoffs: Vec<String>,
}

/// Ask for `max_children` candidates following `parent_summary`.
///
/// The oracle may return more or fewer than asked; all usable candidates
/// are kept.
///
/// # Errors
///
/// Only oracle transport failures. Content problems give
/// [`BranchOutcome::Empty`].
pub async fn generate_branches(
    oracle: &dyn Oracle,
    parent_summary: &str,
    context: &[ContextBlock],
    max_children: usize,
) -> Result<BranchOutcome, OracleError> {
    let prompt = branch_prompt(parent_summary, &format_context(context), max_children);
    let completion = oracle.complete(&prompt).await?;
    Ok(parse_branches(completion.trimmed()))
}

fn parse_branches(content: Option<&str>) -> BranchOutcome {
    let Some(content) = content else {
        return BranchOutcome::Empty(EmptyReason::NoContent);
    };
    let Some(raw) = parse_lenient::<Vec<RawBranch>>(content) else {
        tracing::debug!(chars = content.len(), "branch output was not a JSON array");
        return BranchOutcome::Empty(EmptyReason::Unparseable);
    };

    let candidates: Vec<BranchCandidate> = raw
        .into_iter()
        .filter_map(|branch| {
            let text = branch.decision.trim();
            (!text.is_empty()).then(|| BranchCandidate {
                text: text.to_string(),
                tradeoffs: retain_polarized(&branch.tradeoffs),
            })
        })
        .collect();

    if candidates.is_empty() {
        BranchOutcome::Empty(EmptyReason::NoCandidates)
    } else {
        BranchOutcome::Branches(candidates)
    }
}

/// One generation round under a stored decision, outside any budget.
///
/// The parent summary is the decision's cached summary (computed and
/// cached first when the decision has context). Context comes from the
/// tree root. Each candidate is annotated, and the round is committed in
/// one transaction.
///
/// # Errors
///
/// `CoreError::NotFound` for a missing decision; oracle and storage
/// failures propagate and nothing of the round is persisted.
pub async fn branch_decision(
    db: &PlgDb,
    oracle: &dyn Oracle,
    decision_id: i64,
    max_children: usize,
) -> Result<BranchResponse, EngineError> {
    let summary = summarize_decision(db, oracle, decision_id).await?.summary;
    let parent = db.get_or_create_root_node(decision_id).await?;
    let context = tree_context(db, &parent).await?;

    let candidates = generate_branches(oracle, &summary, &context, max_children)
        .await?
        .into_candidates();

    let mut staged = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let tags = annotate(oracle, &candidate.text).await;
        staged.push(NewBranch {
            parent_node_id: parent.id,
            text: candidate.text,
            tradeoffs: candidate.tradeoffs,
            tags,
        });
    }

    let created = db.commit_level(&staged).await?;
    tracing::info!(decision_id, created = created.len(), "branch round committed");

    Ok(BranchResponse {
        parent_decision_id: decision_id,
        parent_node_id: parent.id,
        created,
    })
}
