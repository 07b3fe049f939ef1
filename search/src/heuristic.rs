//! Heuristic hook for informed search.

use crate::problem::SearchProblem;

/// Estimate of the remaining cost from a state to the nearest goal.
///
/// Only A* evaluates heuristics. Estimates must be finite and non-negative.
/// For A* to return an optimal plan the heuristic must be admissible (never
/// overestimate), and consistent for a state's first pop to be final.
///
/// Any `Fn(&State, &P) -> f64` (closure or fn item) is a heuristic.
pub trait Heuristic<P: SearchProblem + ?Sized> {
    fn estimate(&self, state: &P::State, problem: &P) -> f64;
}

impl<P, F> Heuristic<P> for F
where
    P: SearchProblem + ?Sized,
    F: Fn(&P::State, &P) -> f64,
{
    fn estimate(&self, state: &P::State, problem: &P) -> f64 {
        self(state, problem)
    }
}

/// The trivial heuristic: always zero. A* with it is uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHeuristic;

impl<P: SearchProblem + ?Sized> Heuristic<P> for NullHeuristic {
    fn estimate(&self, _state: &P::State, _problem: &P) -> f64 {
        0.0
    }
}
