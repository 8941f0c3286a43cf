//! Single-shot operations: summarise, annotate, and one branch round.

mod common;

use plg_engine::{SUMMARY_FALLBACK, annotate_decision, branch_decision, summarize_decision};
use plg_llm::testing::FnOracle;
use plg_llm::{Completion, OracleError};
use pretty_assertions::assert_eq;

use common::{fan_out_oracle, is_summary_prompt, seeded_root, test_db};

#[tokio::test]
async fn summary_is_generated_once_then_served_from_cache() {
    let db = test_db().await;
    let root = seeded_root(&db).await;
    let oracle = fan_out_oracle(2);

    let first = summarize_decision(&db, &oracle, root.id).await.unwrap();
    let second = summarize_decision(&db, &oracle, root.id).await.unwrap();

    assert_eq!(first.summary, "Wants to leave accounting for a business");
    assert!(!first.cached);
    assert_eq!(second.summary, first.summary);
    assert!(second.cached);
    assert_eq!(oracle.calls(), 1);

    let prompt = &oracle.prompts()[0];
    assert!(is_summary_prompt(prompt));
    assert!(prompt.contains("- Current Situation: Accountant in a big firm, restless"));
}

#[tokio::test]
async fn decision_without_context_summarizes_to_its_text() {
    let db = test_db().await;
    let decision = db.create_decision("Move to the coast").await.unwrap();
    let oracle = fan_out_oracle(2);

    let response = summarize_decision(&db, &oracle, decision.id).await.unwrap();

    assert_eq!(response.summary, "Move to the coast");
    assert_eq!(oracle.calls(), 0);
    let stored = db.get_decision(decision.id).await.unwrap().unwrap();
    assert_eq!(stored.summary, None);
}

#[tokio::test]
async fn blank_summary_falls_back() {
    let db = test_db().await;
    let root = seeded_root(&db).await;
    let oracle = FnOracle::new(|_| Ok(Completion::text("   ")));

    let response = summarize_decision(&db, &oracle, root.id).await.unwrap();
    assert_eq!(response.summary, SUMMARY_FALLBACK);
}

#[tokio::test]
async fn summary_oracle_error_propagates_and_caches_nothing() {
    let db = test_db().await;
    let root = seeded_root(&db).await;
    let oracle = FnOracle::new(|_| {
        Err(OracleError::Api {
            status: 500,
            message: "down".into(),
        })
    });

    assert!(summarize_decision(&db, &oracle, root.id).await.is_err());
    let stored = db.get_decision(root.id).await.unwrap().unwrap();
    assert_eq!(stored.summary, None);
}

#[tokio::test]
async fn missing_decisions_are_not_found() {
    let db = test_db().await;
    let oracle = fan_out_oracle(2);

    assert!(
        summarize_decision(&db, &oracle, 41)
            .await
            .unwrap_err()
            .is_not_found()
    );
    assert!(
        annotate_decision(&db, &oracle, 41)
            .await
            .unwrap_err()
            .is_not_found()
    );
    assert!(
        branch_decision(&db, &oracle, 41, 3)
            .await
            .unwrap_err()
            .is_not_found()
    );
    assert_eq!(db.count_branch_nodes().await.unwrap(), 0);
}

#[tokio::test]
async fn annotate_decision_does_not_persist_tags() {
    let db = test_db().await;
    let decision = db.create_decision("Start a podcast").await.unwrap();
    let oracle = fan_out_oracle(2);

    let response = annotate_decision(&db, &oracle, decision.id).await.unwrap();

    assert_eq!(response.tags.growth.as_deref(), Some("High"));
    let stored = db.get_decision(decision.id).await.unwrap().unwrap();
    assert_eq!(stored.tags, None);
}

#[tokio::test]
async fn branch_round_places_root_and_commits_annotated_children() {
    let db = test_db().await;
    let root = seeded_root(&db).await;
    let oracle = fan_out_oracle(3);

    let response = branch_decision(&db, &oracle, root.id, 3).await.unwrap();

    assert_eq!(response.parent_decision_id, root.id);
    assert_eq!(response.created.len(), 3);
    let root_node = db.find_branch_node_by_decision(root.id).await.unwrap().unwrap();
    assert_eq!(response.parent_node_id, root_node.id);
    assert!(root_node.is_root());

    for created in &response.created {
        assert_eq!(created.node.parent_id, Some(root_node.id));
        assert_eq!(
            created.decision.tags.as_ref().and_then(|t| t.emotion.as_deref()),
            Some("Hopeful")
        );
    }
    // Summary was generated and cached on the way.
    let stored = db.get_decision(root.id).await.unwrap().unwrap();
    assert!(stored.summary.is_some());
}

#[tokio::test]
async fn branch_round_under_a_child_uses_root_context() {
    let db = test_db().await;
    let root = seeded_root(&db).await;
    let oracle = fan_out_oracle(1);

    let first = branch_decision(&db, &oracle, root.id, 1).await.unwrap();
    let child_id = first.created[0].decision.id;
    let second = branch_decision(&db, &oracle, child_id, 1).await.unwrap();

    assert_eq!(second.parent_node_id, first.created[0].node.id);
    let last_branch_prompt = oracle
        .prompts()
        .into_iter()
        .rev()
        .find(|p| common::is_branch_prompt(p))
        .unwrap();
    assert!(last_branch_prompt.contains("- Ideal Outcome: Own a small business"));
    assert!(last_branch_prompt.contains("Path 0"));
}

#[tokio::test]
async fn unparseable_branch_round_creates_nothing() {
    let db = test_db().await;
    let decision = db.create_decision("Retrain as a nurse").await.unwrap();
    let oracle = FnOracle::new(|_| Ok(Completion::text("not json at all")));

    let response = branch_decision(&db, &oracle, decision.id, 2).await.unwrap();

    assert!(response.created.is_empty());
    assert_eq!(db.count_branch_nodes().await.unwrap(), 1);
}
