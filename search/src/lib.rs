//! Wayfinder Search: generic graph search over caller-defined problems.
//!
//! A problem implements [`SearchProblem`] (start state, goal test,
//! successors). The engine explores it with one of four strategies and
//! returns the action sequence from the start to a goal.
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfinder_search  ←  wayfinder_harness  ←  lock-tests, benchmarks
//! (engine, frontier)   (worlds, replay, runner)
//! ```
//!
//! # Key types
//!
//! - [`SearchProblem`] — the problem contract
//! - [`Frontier`] — stack, queue and priority exploration orders
//! - [`Heuristic`] — remaining-cost estimate for A*
//! - [`SearchPolicy`] — per-call configuration
//! - [`SearchOutcome`] / [`SearchError`] — the two ways a search ends

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod policy;
pub mod problem;
pub mod report;
pub mod search;

pub use error::{ProblemStage, SearchError};
pub use frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};
pub use heuristic::{Heuristic, NullHeuristic};
pub use policy::SearchPolicy;
pub use problem::{SearchProblem, Successor};
pub use search::{
    a_star_search, breadth_first_search, depth_first_search, search, uniform_cost_search,
    SearchOutcome, SearchResult, SearchStats, Strategy, UnknownStrategy,
};

pub use search::a_star_search as astar;
pub use search::breadth_first_search as bfs;
pub use search::depth_first_search as dfs;
pub use search::uniform_cost_search as ucs;
