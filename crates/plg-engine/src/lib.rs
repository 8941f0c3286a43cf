//! # plg-engine
//!
//! The tree-expansion engine of the Parallel Life Generator.
//!
//! - `summarize`: synthesize context into a summary, cached per decision
//! - `annotate`: risk / growth / emotion tags for one decision text
//! - `branching`: oracle-driven child candidates with fail-soft parsing
//! - `expand`: bounded breadth-first expansion with per-level commits
//!
//! Every operation takes the store and the oracle explicitly; nothing here
//! builds either.

pub mod annotate;
pub mod branching;
pub mod context;
pub mod error;
pub mod expand;
pub mod parse;
pub mod prompts;
pub mod summarize;

pub use annotate::{annotate, annotate_decision};
pub use branching::{
    BranchCandidate, BranchOutcome, EmptyReason, branch_decision, generate_branches,
};
pub use error::EngineError;
pub use expand::{ExpandOutcome, Expander, MAX_NODES};
pub use summarize::{SUMMARY_FALLBACK, summarize, summarize_decision};
