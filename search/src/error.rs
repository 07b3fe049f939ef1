//! Typed search errors.
//!
//! Every way a search can end without a plan is a `SearchError`. The engine
//! never fabricates a path: an exhausted frontier is `NoPathFound`, not an
//! empty action list.
//!
//! Offending states are captured as their `Debug` rendering so the error type
//! stays independent of the problem's `State` parameter.

use thiserror::Error;

/// The problem callback that was running when a panic was caught.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemStage {
    StartState,
    IsGoal,
    Successors,
    Heuristic,
}

impl ProblemStage {
    /// Stable snake_case name used in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StartState => "start_state",
            Self::IsGoal => "is_goal",
            Self::Successors => "successors",
            Self::Heuristic => "heuristic",
        }
    }
}

impl std::fmt::Display for ProblemStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed failure of a search invocation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The frontier emptied before any goal state was popped.
    #[error("no path found after {expansions} expansions")]
    NoPathFound { expansions: u64 },

    /// A cost-based strategy received a negative or non-finite step cost.
    #[error("invalid step cost {cost} on successor of state {state}")]
    InvalidStepCost { state: String, cost: f64 },

    /// Finite step costs summed to a non-finite path cost on a successor
    /// of `state`.
    #[error("path cost overflowed to {cost} on successor of state {state}")]
    PathCostOverflow { state: String, cost: f64 },

    /// The heuristic returned a negative or non-finite estimate.
    #[error("invalid heuristic estimate {estimate} for state {state}")]
    InvalidHeuristic { state: String, estimate: f64 },

    /// A problem callback panicked. `state` is `None` only for `start_state`.
    #[error("problem panicked in {stage}{}", on_state(.state))]
    ProblemPanicked {
        stage: ProblemStage,
        state: Option<String>,
    },

    /// The policy's expansion cap was reached before a goal was popped.
    #[error("expansion budget of {limit} exceeded")]
    ExpansionBudgetExceeded { limit: u64 },

    /// The policy failed pre-flight validation.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}

fn on_state(state: &Option<String>) -> String {
    state
        .as_ref()
        .map(|s| format!(" on state {s}"))
        .unwrap_or_default()
}

impl SearchError {
    /// Stable snake_case tag for the variant, used in JSON reports.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoPathFound { .. } => "no_path_found",
            Self::InvalidStepCost { .. } => "invalid_step_cost",
            Self::PathCostOverflow { .. } => "path_cost_overflow",
            Self::InvalidHeuristic { .. } => "invalid_heuristic",
            Self::ProblemPanicked { .. } => "problem_panicked",
            Self::ExpansionBudgetExceeded { .. } => "expansion_budget_exceeded",
            Self::InvalidPolicy { .. } => "invalid_policy",
        }
    }
}
