//! Harness runner: search a world, replay the plan, package a report.
//!
//! # Pipeline
//!
//! ```text
//! search() → replay_plan() → outcome_to_json() + replay fields
//!   → canonical bytes → canonical_hash(DOMAIN_RUN_REPORT)
//! ```
//!
//! The runner does not implement search logic itself; a failed search or a
//! failed replay is returned as [`RunError`] with no report.

use std::fmt::Debug;

use thiserror::Error;
use tracing::debug;
use wayfinder_search::report::outcome_to_json;
use wayfinder_search::{
    search, Heuristic, SearchError, SearchOutcome, SearchPolicy, SearchProblem, Strategy,
};

use crate::digest::{canonical_hash, ContentHash, DOMAIN_PLAN, DOMAIN_RUN_REPORT};
use crate::replay::{costs_agree, replay_plan, Replay, ReplayError};

/// Why a run produced no report.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("search failed: {0}")]
    Search(#[from] SearchError),

    #[error("plan failed replay: {0}")]
    Replay(#[from] ReplayError),

    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A verified search run.
#[derive(Debug, Clone)]
pub struct RunReport<S, A> {
    pub strategy: Strategy,
    pub outcome: SearchOutcome<S, A>,
    pub replay: Replay<S>,
    /// Digest of the action list alone.
    pub plan_digest: ContentHash,
    /// The rendered report.
    pub report: serde_json::Value,
    /// `report` serialized; `serde_json::Value` maps are key-ordered, so
    /// equal reports give equal bytes.
    pub report_bytes: Vec<u8>,
    /// Digest of `report_bytes`.
    pub digest: ContentHash,
}

/// Run one strategy against `problem` and verify the plan by replay.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the search fails, [`RunError::Replay`] if
/// the returned plan does not replay to a goal at the reported cost.
pub fn run_search<P, H>(
    problem: &P,
    strategy: Strategy,
    heuristic: &H,
    policy: &SearchPolicy,
) -> Result<RunReport<P::State, P::Action>, RunError>
where
    P: SearchProblem + ?Sized,
    P::Action: PartialEq,
    H: Heuristic<P> + ?Sized,
{
    let outcome = search(problem, strategy, heuristic, policy)?;
    let replay = replay_plan(problem, &outcome.actions)?;
    if !costs_agree(replay.cost, outcome.cost) {
        return Err(ReplayError::CostMismatch {
            replayed: replay.cost,
            reported: Some(outcome.cost),
        }
        .into());
    }

    let plan_digest = plan_digest(&outcome.actions)?;

    let mut report = outcome_to_json(strategy, &outcome);
    report["plan_digest"] = serde_json::json!(plan_digest.as_str());
    report["replay"] = serde_json::json!({
        "final_state": format!("{:?}", replay.final_state),
        "verified": true,
    });
    let report_bytes = serde_json::to_vec(&report)?;
    let digest = canonical_hash(DOMAIN_RUN_REPORT, &report_bytes);

    debug!(%strategy, digest = %digest, plan_len = outcome.actions.len(), "run verified");
    Ok(RunReport {
        strategy,
        outcome,
        replay,
        plan_digest,
        report,
        report_bytes,
        digest,
    })
}

/// Run every strategy in [`Strategy::ALL`] order.
pub fn run_all_strategies<P, H>(
    problem: &P,
    heuristic: &H,
    policy: &SearchPolicy,
) -> Vec<(Strategy, Result<RunReport<P::State, P::Action>, RunError>)>
where
    P: SearchProblem + ?Sized,
    P::Action: PartialEq,
    H: Heuristic<P> + ?Sized,
{
    Strategy::ALL
        .iter()
        .map(|&strategy| (strategy, run_search(problem, strategy, heuristic, policy)))
        .collect()
}

/// Digest of a plan: the JSON array of `Debug`-rendered actions.
///
/// # Errors
///
/// Returns [`RunError::Serialize`] if the array cannot be serialized.
pub fn plan_digest<A: Debug>(actions: &[A]) -> Result<ContentHash, RunError> {
    let rendered: Vec<String> = actions.iter().map(|a| format!("{a:?}")).collect();
    let bytes = serde_json::to_vec(&rendered)?;
    Ok(canonical_hash(DOMAIN_PLAN, &bytes))
}
