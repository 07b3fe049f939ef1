//! JSON rendering of search outcomes and errors.
//!
//! Objects are built with `serde_json::json!`, whose map is ordered by key,
//! so the same outcome always renders to the same bytes.

use std::fmt::Debug;

use crate::error::SearchError;
use crate::search::{SearchOutcome, SearchStats, Strategy};

/// Render a successful search. Actions are rendered with `Debug`.
#[must_use]
pub fn outcome_to_json<S, A: Debug>(
    strategy: Strategy,
    outcome: &SearchOutcome<S, A>,
) -> serde_json::Value {
    let actions: Vec<String> = outcome.actions.iter().map(|a| format!("{a:?}")).collect();
    serde_json::json!({
        "actions": actions,
        "path_cost": outcome.cost,
        "path_length": outcome.actions.len(),
        "stats": stats_to_json(&outcome.stats),
        "status": "goal_found",
        "strategy": strategy.short_name(),
    })
}

/// Render a failed search.
#[must_use]
pub fn error_to_json(strategy: Strategy, err: &SearchError) -> serde_json::Value {
    serde_json::json!({
        "error": {"detail": err.to_string(), "type": err.kind()},
        "status": "failed",
        "strategy": strategy.short_name(),
    })
}

fn stats_to_json(stats: &SearchStats) -> serde_json::Value {
    serde_json::json!({
        "expansions": stats.expansions,
        "frontier_high_water": stats.frontier_high_water,
        "generated": stats.generated,
        "pushes": stats.pushes,
        "stale_pops": stats.stale_pops,
    })
}
