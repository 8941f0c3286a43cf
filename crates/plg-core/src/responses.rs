//! CLI response types returned as JSON by `plg` commands.
//!
//! These structs define the shape of output for `plg collect`,
//! `plg summarise`, `plg branch`, `plg annotate`, `plg expand`, and
//! `plg export`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::entities::{BranchNode, ContextBlock, Decision};
use crate::enums::ExportFormat;
use crate::tags::TagRecord;

/// How an expansion run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionStatus {
    /// Requested depth reached or frontier exhausted.
    Completed,
    /// Node ceiling reached; the partial tree is committed.
    BudgetExceeded,
}

/// Counters for one expansion run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExpansionReport {
    pub root_decision_id: i64,
    pub root_node_id: i64,
    /// Levels whose children were committed.
    pub levels_expanded: u32,
    /// Nodes created by this run (the root is not included).
    pub nodes_created: usize,
    /// Nodes counted against the budget, including the root.
    pub total_nodes: usize,
    pub max_nodes: usize,
}

/// Response from `plg expand`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExpandResponse {
    pub status: ExpansionStatus,
    pub stopped_early: bool,
    pub report: ExpansionReport,
}

/// Response from `plg collect`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CollectResponse {
    pub decision: Decision,
    pub context_blocks: Vec<ContextBlock>,
}

/// Response from `plg summarise`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SummaryResponse {
    pub decision_id: i64,
    pub summary: String,
    /// Whether the summary came from the decision's cache.
    pub cached: bool,
}

/// One child created by `plg branch`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreatedBranch {
    pub node: BranchNode,
    pub decision: Decision,
}

/// Response from `plg branch`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BranchResponse {
    pub parent_decision_id: i64,
    pub parent_node_id: i64,
    pub created: Vec<CreatedBranch>,
}

/// Response from `plg annotate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnnotateResponse {
    pub decision_id: i64,
    pub tags: TagRecord,
}

/// Response from `plg export`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExportResponse {
    pub decision_id: i64,
    pub format: ExportFormat,
    pub path: PathBuf,
    pub bytes: usize,
}
