//! Search problem contract.

use std::fmt::Debug;
use std::hash::Hash;

/// One outgoing edge of a state: the state it leads to, the action that
/// labels it, and the non-negative cost of taking it.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub cost: f64,
}

impl<S, A> Successor<S, A> {
    #[must_use]
    pub fn new(state: S, action: A, cost: f64) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

/// Trait for anything that can be searched.
///
/// # Contract
///
/// - `start_state` is called once per search.
/// - `is_goal` and `successors` must be pure functions of their argument:
///   same state → same answer, successors in the same order.
/// - Successor costs must be finite and non-negative. Cost-based strategies
///   reject anything else with [`crate::error::SearchError::InvalidStepCost`].
/// - `action_sequence_cost` is never called by the engine. It exists so
///   callers can price and validate a returned plan.
pub trait SearchProblem {
    /// A node of the implicit graph. Used as a map key by the engine.
    type State: Clone + Eq + Hash + Debug;
    /// An edge label. Returned verbatim in the plan.
    type Action: Clone + Debug;

    /// The state the search starts from.
    fn start_state(&self) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Outgoing edges of `state`. Empty for a dead end.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of executing `actions` from the start state, or `None` if
    /// any action is illegal where it is taken.
    fn action_sequence_cost(&self, actions: &[Self::Action]) -> Option<f64>;
}

impl<P: SearchProblem + ?Sized> SearchProblem for &P {
    type State = P::State;
    type Action = P::Action;

    fn start_state(&self) -> Self::State {
        (**self).start_state()
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        (**self).is_goal(state)
    }

    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>> {
        (**self).successors(state)
    }

    fn action_sequence_cost(&self, actions: &[Self::Action]) -> Option<f64> {
        (**self).action_sequence_cost(actions)
    }
}
