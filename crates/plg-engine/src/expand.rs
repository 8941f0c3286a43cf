//! Decision tree expander.
//!
//! Grows a tree breadth-first from a root decision. Each level's children
//! are generated against the parents' summaries and the root context,
//! annotated, staged, and committed together in one transaction. A global
//! ceiling of [`MAX_NODES`] nodes per run (root included) is checked before
//! every parent and every candidate; hitting it commits the staged work and
//! ends the run with [`ExpandOutcome::BudgetExceeded`].

use std::collections::VecDeque;

use plg_core::entities::{BranchNode, Decision};
use plg_core::errors::CoreError;
use plg_core::responses::{ExpandResponse, ExpansionReport, ExpansionStatus};
use plg_db::{NewBranch, PlgDb};
use plg_llm::Oracle;

use crate::annotate::annotate;
use crate::branching::{BranchOutcome, generate_branches};
use crate::context::tree_context;
use crate::error::EngineError;

/// Node ceiling for one expansion run, the root included.
pub const MAX_NODES: usize = 50;

/// How a run ended. Both variants leave a valid, committed tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpandOutcome {
    /// Requested depth reached or frontier exhausted.
    Completed(ExpansionReport),
    /// Ceiling reached; everything staged before the stop is committed.
    BudgetExceeded(ExpansionReport),
}

impl ExpandOutcome {
    #[must_use]
    pub const fn report(&self) -> &ExpansionReport {
        match self {
            Self::Completed(report) | Self::BudgetExceeded(report) => report,
        }
    }

    #[must_use]
    pub const fn status(&self) -> ExpansionStatus {
        match self {
            Self::Completed(_) => ExpansionStatus::Completed,
            Self::BudgetExceeded(_) => ExpansionStatus::BudgetExceeded,
        }
    }

    #[must_use]
    pub fn into_response(self) -> ExpandResponse {
        let status = self.status();
        let report = match self {
            Self::Completed(report) | Self::BudgetExceeded(report) => report,
        };
        ExpandResponse {
            status,
            stopped_early: status == ExpansionStatus::BudgetExceeded,
            report,
        }
    }
}

/// Counters for the run in progress.
struct Run {
    root: BranchNode,
    root_decision_id: i64,
    node_count: usize,
    nodes_created: usize,
    levels_expanded: u32,
}

impl Run {
    const fn budget_spent(&self) -> bool {
        self.node_count >= MAX_NODES
    }

    fn report(&self) -> ExpansionReport {
        ExpansionReport {
            root_decision_id: self.root_decision_id,
            root_node_id: self.root.id,
            levels_expanded: self.levels_expanded,
            nodes_created: self.nodes_created,
            total_nodes: self.node_count,
            max_nodes: MAX_NODES,
        }
    }
}

/// Runs bounded expansions against one store and one oracle.
pub struct Expander<'a> {
    db: &'a PlgDb,
    oracle: &'a dyn Oracle,
}

impl<'a> Expander<'a> {
    #[must_use]
    pub const fn new(db: &'a PlgDb, oracle: &'a dyn Oracle) -> Self {
        Self { db, oracle }
    }

    /// Expand `root_decision_id` for up to `max_depth` levels, asking for
    /// `max_children` branches per parent.
    ///
    /// # Errors
    ///
    /// - `CoreError::NotFound` when the root decision does not exist. Nothing
    ///   is written.
    /// - Oracle and storage failures propagate. Levels committed before the
    ///   failure stay; the failing level's staged work is dropped.
    pub async fn expand(
        &self,
        root_decision_id: i64,
        max_depth: u32,
        max_children: usize,
    ) -> Result<ExpandOutcome, EngineError> {
        if self.db.get_decision(root_decision_id).await?.is_none() {
            return Err(CoreError::decision_not_found(root_decision_id).into());
        }
        let root = self.db.get_or_create_root_node(root_decision_id).await?;
        let context = tree_context(self.db, &root).await?;

        tracing::info!(
            root_decision_id,
            root_node_id = root.id,
            max_depth,
            max_children,
            "starting expansion"
        );

        let mut run = Run {
            root,
            root_decision_id,
            node_count: 1,
            nodes_created: 0,
            levels_expanded: 0,
        };
        let mut frontier = VecDeque::from([root]);

        for level in 0..max_depth {
            let level_size = frontier.len();
            if level_size == 0 {
                tracing::debug!(level, "frontier exhausted");
                break;
            }
            tracing::info!(level, level_size, node_count = run.node_count, "expanding level");

            let mut staged: Vec<NewBranch> = Vec::new();
            for _ in 0..level_size {
                let Some(parent) = frontier.pop_front() else {
                    break;
                };
                let Some(decision) = self.parent_decision(&parent).await? else {
                    tracing::warn!(node_id = parent.id, "node has no decision, skipping");
                    continue;
                };
                if run.budget_spent() {
                    return self.stop_for_budget(run, &staged).await;
                }

                let outcome = generate_branches(
                    self.oracle,
                    decision.generation_summary(),
                    &context,
                    max_children,
                )
                .await?;
                if let BranchOutcome::Empty(reason) = &outcome {
                    tracing::debug!(node_id = parent.id, ?reason, "no branches for parent");
                }

                for candidate in outcome.into_candidates() {
                    if run.budget_spent() {
                        return self.stop_for_budget(run, &staged).await;
                    }
                    let tags = annotate(self.oracle, &candidate.text).await;
                    staged.push(NewBranch {
                        parent_node_id: parent.id,
                        text: candidate.text,
                        tradeoffs: candidate.tradeoffs,
                        tags,
                    });
                    run.node_count += 1;
                }
            }

            let committed = self.db.commit_level(&staged).await?;
            run.nodes_created += committed.len();
            run.levels_expanded += 1;
            tracing::info!(
                level,
                created = committed.len(),
                node_count = run.node_count,
                "level committed"
            );
            frontier.extend(committed.into_iter().map(|branch| branch.node));
        }

        tracing::info!(
            nodes_created = run.nodes_created,
            levels = run.levels_expanded,
            "expansion complete"
        );
        Ok(ExpandOutcome::Completed(run.report()))
    }

    async fn parent_decision(&self, node: &BranchNode) -> Result<Option<Decision>, EngineError> {
        match node.decision_id {
            Some(decision_id) => Ok(self.db.get_decision(decision_id).await?),
            None => Ok(None),
        }
    }

    /// Commit what the current level staged, then report the abort.
    async fn stop_for_budget(
        &self,
        mut run: Run,
        staged: &[NewBranch],
    ) -> Result<ExpandOutcome, EngineError> {
        let committed = self.db.commit_level(staged).await?;
        run.nodes_created += committed.len();
        // The interrupted level counts even when nothing was staged yet.
        run.levels_expanded += 1;
        tracing::warn!(
            node_count = run.node_count,
            max_nodes = MAX_NODES,
            created = committed.len(),
            "node budget reached, stopping early"
        );
        Ok(ExpandOutcome::BudgetExceeded(run.report()))
    }
}
