//! `replay_plan()`: verify a plan by re-walking it through the problem.
//!
//! Replay uses only the problem's own `successors` and `is_goal`, never the
//! engine, so a passing replay is independent evidence that the plan is
//! legal and ends at a goal.

use thiserror::Error;
use wayfinder_search::SearchProblem;

/// Tolerance for comparing path costs summed in different orders.
pub const COST_TOLERANCE: f64 = 1e-9;

/// Whether two path costs agree within [`COST_TOLERANCE`]. Equal infinities
/// agree; NaN agrees with nothing.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn costs_agree(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() <= COST_TOLERANCE
}

/// A plan that replayed cleanly.
#[derive(Debug, Clone, PartialEq)]
pub struct Replay<S> {
    /// The goal state the plan ends in.
    pub final_state: S,
    /// Sum of successor step costs along the plan.
    pub cost: f64,
}

/// Why a plan failed to replay.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReplayError {
    /// No successor of `state` is labelled with the plan's action at `index`.
    #[error("action {action} at index {index} is not available from state {state}")]
    IllegalAction {
        index: usize,
        action: String,
        state: String,
    },

    /// Every action replayed but the final state is not a goal.
    #[error("plan ends in non-goal state {state}")]
    NotAtGoal { state: String },

    /// The problem prices the plan differently from the replayed step costs.
    #[error("plan cost mismatch: replayed {replayed}, problem reports {reported:?}")]
    CostMismatch {
        replayed: f64,
        reported: Option<f64>,
    },
}

/// Replay `actions` from the start state.
///
/// At each step the first successor whose action equals the plan's action is
/// taken. The replayed cost is cross-checked against
/// [`SearchProblem::action_sequence_cost`].
///
/// # Errors
///
/// Returns [`ReplayError`] if an action is unavailable, the plan does not end
/// at a goal, or the problem's own pricing disagrees with the replay.
pub fn replay_plan<P>(problem: &P, actions: &[P::Action]) -> Result<Replay<P::State>, ReplayError>
where
    P: SearchProblem + ?Sized,
    P::Action: PartialEq,
{
    let mut state = problem.start_state();
    let mut cost = 0.0;

    for (index, action) in actions.iter().enumerate() {
        let Some(next) = problem
            .successors(&state)
            .into_iter()
            .find(|s| s.action == *action)
        else {
            return Err(ReplayError::IllegalAction {
                index,
                action: format!("{action:?}"),
                state: format!("{state:?}"),
            });
        };
        cost += next.cost;
        state = next.state;
    }

    if !problem.is_goal(&state) {
        return Err(ReplayError::NotAtGoal {
            state: format!("{state:?}"),
        });
    }

    let reported = problem.action_sequence_cost(actions);
    match reported {
        Some(r) if costs_agree(r, cost) => Ok(Replay {
            final_state: state,
            cost,
        }),
        _ => Err(ReplayError::CostMismatch {
            replayed: cost,
            reported,
        }),
    }
}
