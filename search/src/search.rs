//! Search entry point and traversal loops.
//!
//! # Lifecycle
//!
//! ```text
//! Ready → Expanding → GoalFound   (Ok(SearchOutcome))
//!                   → Exhausted   (Err(NoPathFound))
//! ```
//!
//! Goal tests run when a state is popped, not when it is generated. The
//! frontier, visited set, distance map and came-from map are all locals of
//! one call; nothing survives between searches.

use std::collections::{HashMap, HashSet};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{ProblemStage, SearchError};
use crate::frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};
use crate::heuristic::{Heuristic, NullHeuristic};
use crate::policy::SearchPolicy;
use crate::problem::{SearchProblem, Successor};

/// Exploration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    AStar,
}

impl Strategy {
    /// Every strategy, in the order tests and benchmarks iterate them.
    pub const ALL: [Strategy; 4] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::UniformCost,
        Strategy::AStar,
    ];

    /// Short name (`dfs`, `bfs`, `ucs`, `astar`).
    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
            Self::UniformCost => "ucs",
            Self::AStar => "astar",
        }
    }

    /// Whether the strategy orders its frontier by path cost.
    #[must_use]
    pub fn is_cost_based(self) -> bool {
        matches!(self, Self::UniformCost | Self::AStar)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

/// A strategy name that is neither a short nor a long strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search strategy: {0:?}")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth_first" | "depthfirstsearch" => Ok(Self::DepthFirst),
            "bfs" | "breadth_first" | "breadthfirstsearch" => Ok(Self::BreadthFirst),
            "ucs" | "uniform_cost" | "uniformcostsearch" => Ok(Self::UniformCost),
            "astar" | "a_star" | "astarsearch" => Ok(Self::AStar),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States whose successors were generated.
    pub expansions: u64,
    /// Successor edges returned by the problem.
    pub generated: u64,
    /// Frontier pushes, including the start state.
    pub pushes: u64,
    /// Priority-frontier entries discarded because a better distance was
    /// recorded after they were pushed.
    pub stale_pops: u64,
    /// Largest frontier size reached.
    pub frontier_high_water: usize,
}

/// A successful search: the plan, its cost and the goal it reaches.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<S, A> {
    /// Actions from the start state to `goal`, in execution order.
    pub actions: Vec<A>,
    /// Sum of step costs along `actions`.
    pub cost: f64,
    /// The goal state the plan ends in.
    pub goal: S,
    pub stats: SearchStats,
}

/// Result of searching problem `P`.
pub type SearchResult<P> =
    Result<SearchOutcome<<P as SearchProblem>::State, <P as SearchProblem>::Action>, SearchError>;

/// Came-from record: how a state was first (or most cheaply) reached.
struct Step<S, A> {
    parent: S,
    action: A,
    cost: f64,
}

/// Runs problem callbacks, optionally catching panics.
struct Callbacks<'p, P: ?Sized> {
    problem: &'p P,
    catch_panics: bool,
}

impl<'p, P: SearchProblem + ?Sized> Callbacks<'p, P> {
    fn guard<T>(
        &self,
        stage: ProblemStage,
        state: Option<&P::State>,
        f: impl FnOnce() -> T,
    ) -> Result<T, SearchError> {
        if !self.catch_panics {
            return Ok(f());
        }
        catch_unwind(AssertUnwindSafe(f)).map_err(|_| SearchError::ProblemPanicked {
            stage,
            state: state.map(|s| format!("{s:?}")),
        })
    }

    fn start_state(&self) -> Result<P::State, SearchError> {
        self.guard(ProblemStage::StartState, None, || {
            self.problem.start_state()
        })
    }

    fn is_goal(&self, state: &P::State) -> Result<bool, SearchError> {
        self.guard(ProblemStage::IsGoal, Some(state), || {
            self.problem.is_goal(state)
        })
    }

    fn successors(
        &self,
        state: &P::State,
    ) -> Result<Vec<Successor<P::State, P::Action>>, SearchError> {
        self.guard(ProblemStage::Successors, Some(state), || {
            self.problem.successors(state)
        })
    }

    fn estimate<H: Heuristic<P> + ?Sized>(
        &self,
        heuristic: &H,
        state: &P::State,
    ) -> Result<f64, SearchError> {
        let estimate = self.guard(ProblemStage::Heuristic, Some(state), || {
            heuristic.estimate(state, self.problem)
        })?;
        if !estimate.is_finite() || estimate < 0.0 {
            return Err(SearchError::InvalidHeuristic {
                state: format!("{state:?}"),
                estimate,
            });
        }
        Ok(estimate)
    }
}

/// Run a search with the given strategy.
///
/// `heuristic` is only evaluated by [`Strategy::AStar`]; pass
/// [`NullHeuristic`] for the others.
///
/// # Errors
///
/// - [`SearchError::InvalidPolicy`] if `policy` fails validation.
/// - [`SearchError::NoPathFound`] if the frontier is exhausted.
/// - [`SearchError::InvalidStepCost`] if a cost-based strategy sees a
///   negative or non-finite step cost.
/// - [`SearchError::PathCostOverflow`] if finite step costs sum to a
///   non-finite path cost.
/// - [`SearchError::InvalidHeuristic`] for a negative or non-finite estimate.
/// - [`SearchError::ProblemPanicked`] if a callback panics and
///   `policy.catch_panics` is set.
/// - [`SearchError::ExpansionBudgetExceeded`] if `policy.max_expansions` is
///   reached first.
pub fn search<P, H>(
    problem: &P,
    strategy: Strategy,
    heuristic: &H,
    policy: &SearchPolicy,
) -> SearchResult<P>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P> + ?Sized,
{
    policy.validate()?;
    let callbacks = Callbacks {
        problem,
        catch_panics: policy.catch_panics,
    };
    debug!(%strategy, max_expansions = ?policy.max_expansions, "search started");

    let result = match strategy {
        Strategy::DepthFirst => traverse_uninformed(&callbacks, StackFrontier::new(), policy),
        Strategy::BreadthFirst => traverse_uninformed(&callbacks, QueueFrontier::new(), policy),
        Strategy::UniformCost => traverse_cost_based(&callbacks, None::<&NullHeuristic>, policy),
        Strategy::AStar => traverse_cost_based(&callbacks, Some(heuristic), policy),
    };

    match &result {
        Ok(outcome) => debug!(
            %strategy,
            plan_len = outcome.actions.len(),
            cost = outcome.cost,
            expansions = outcome.stats.expansions,
            "goal found"
        ),
        Err(err) => debug!(%strategy, error = %err, "search failed"),
    }
    result
}

/// Depth-first graph search with the default policy.
///
/// # Errors
///
/// See [`search`].
pub fn depth_first_search<P: SearchProblem + ?Sized>(problem: &P) -> SearchResult<P> {
    search(
        problem,
        Strategy::DepthFirst,
        &NullHeuristic,
        &SearchPolicy::default(),
    )
}

/// Breadth-first graph search with the default policy.
///
/// # Errors
///
/// See [`search`].
pub fn breadth_first_search<P: SearchProblem + ?Sized>(problem: &P) -> SearchResult<P> {
    search(
        problem,
        Strategy::BreadthFirst,
        &NullHeuristic,
        &SearchPolicy::default(),
    )
}

/// Uniform-cost search with the default policy.
///
/// # Errors
///
/// See [`search`].
pub fn uniform_cost_search<P: SearchProblem + ?Sized>(problem: &P) -> SearchResult<P> {
    search(
        problem,
        Strategy::UniformCost,
        &NullHeuristic,
        &SearchPolicy::default(),
    )
}

/// A* search with the default policy.
///
/// # Errors
///
/// See [`search`].
pub fn a_star_search<P, H>(problem: &P, heuristic: &H) -> SearchResult<P>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P> + ?Sized,
{
    search(problem, Strategy::AStar, heuristic, &SearchPolicy::default())
}

fn check_budget(policy: &SearchPolicy, stats: &SearchStats) -> Result<(), SearchError> {
    match policy.max_expansions {
        Some(limit) if stats.expansions >= limit => {
            Err(SearchError::ExpansionBudgetExceeded { limit })
        }
        _ => Ok(()),
    }
}

/// DFS/BFS loop. A state is marked visited when first discovered, and its
/// came-from entry is never overwritten.
fn traverse_uninformed<P, F>(
    callbacks: &Callbacks<'_, P>,
    mut frontier: F,
    policy: &SearchPolicy,
) -> SearchResult<P>
where
    P: SearchProblem + ?Sized,
    F: Frontier<P::State>,
{
    let start = callbacks.start_state()?;
    let mut stats = SearchStats::default();
    let mut visited: HashSet<P::State> = HashSet::new();
    let mut came_from: HashMap<P::State, Step<P::State, P::Action>> = HashMap::new();

    visited.insert(start.clone());
    frontier.push(start.clone(), 0.0);
    stats.pushes += 1;

    while let Some(current) = frontier.pop() {
        if callbacks.is_goal(&current)? {
            stats.frontier_high_water = frontier.high_water();
            let (actions, cost) = reconstruct_path(&came_from, &current);
            return Ok(SearchOutcome {
                actions,
                cost,
                goal: current,
                stats,
            });
        }

        check_budget(policy, &stats)?;
        let successors = callbacks.successors(&current)?;
        stats.expansions += 1;
        stats.generated += successors.len() as u64;
        trace!(state = ?current, successors = successors.len(), "expand");

        for Successor {
            state,
            action,
            cost,
        } in successors
        {
            if visited.contains(&state) {
                continue;
            }
            visited.insert(state.clone());
            came_from.insert(
                state.clone(),
                Step {
                    parent: current.clone(),
                    action,
                    cost,
                },
            );
            frontier.push(state, 0.0);
            stats.pushes += 1;
        }
    }

    Err(SearchError::NoPathFound {
        expansions: stats.expansions,
    })
}

/// UCS/A* loop over a priority frontier with lazy duplicate entries.
///
/// Entries carry the distance they were pushed with. An entry whose distance
/// is worse than the recorded best is stale and is dropped on pop. With
/// `heuristic == None` the priority is the distance alone.
fn traverse_cost_based<P, H>(
    callbacks: &Callbacks<'_, P>,
    heuristic: Option<&H>,
    policy: &SearchPolicy,
) -> SearchResult<P>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P> + ?Sized,
{
    let estimate = |state: &P::State| -> Result<f64, SearchError> {
        match heuristic {
            Some(h) => callbacks.estimate(h, state),
            None => Ok(0.0),
        }
    };

    let start = callbacks.start_state()?;
    let mut stats = SearchStats::default();
    let mut frontier: PriorityFrontier<(P::State, f64)> = PriorityFrontier::new();
    let mut distance: HashMap<P::State, f64> = HashMap::new();
    let mut came_from: HashMap<P::State, Step<P::State, P::Action>> = HashMap::new();

    let start_priority = estimate(&start)?;
    distance.insert(start.clone(), 0.0);
    frontier.push((start, 0.0), start_priority);
    stats.pushes += 1;

    while let Some((current, current_distance)) = frontier.pop() {
        if distance
            .get(&current)
            .is_some_and(|&best| current_distance > best)
        {
            stats.stale_pops += 1;
            continue;
        }

        if callbacks.is_goal(&current)? {
            stats.frontier_high_water = frontier.high_water();
            let (actions, cost) = reconstruct_path(&came_from, &current);
            return Ok(SearchOutcome {
                actions,
                cost,
                goal: current,
                stats,
            });
        }

        check_budget(policy, &stats)?;
        let successors = callbacks.successors(&current)?;
        stats.expansions += 1;
        stats.generated += successors.len() as u64;
        trace!(
            state = ?current,
            distance = current_distance,
            successors = successors.len(),
            "expand"
        );

        for Successor {
            state,
            action,
            cost,
        } in successors
        {
            if !cost.is_finite() || cost < 0.0 {
                return Err(SearchError::InvalidStepCost {
                    state: format!("{current:?}"),
                    cost,
                });
            }
            let candidate = current_distance + cost;
            if !candidate.is_finite() {
                return Err(SearchError::PathCostOverflow {
                    state: format!("{current:?}"),
                    cost: candidate,
                });
            }
            if let Some(&best) = distance.get(&state) {
                if candidate >= best {
                    continue;
                }
            }
            let priority = candidate + estimate(&state)?;
            distance.insert(state.clone(), candidate);
            came_from.insert(
                state.clone(),
                Step {
                    parent: current.clone(),
                    action,
                    cost,
                },
            );
            frontier.push((state, candidate), priority);
            stats.pushes += 1;
        }
        trace!(
            frontier = frontier.len(),
            next_priority = ?frontier.peek_priority(),
            "frontier after expansion"
        );
    }

    Err(SearchError::NoPathFound {
        expansions: stats.expansions,
    })
}

/// Walk `came_from` back from `goal` and return the actions in execution
/// order with their summed cost.
///
/// The start state never has a came-from entry, so the walk ends there. A
/// goal equal to the start yields an empty plan.
fn reconstruct_path<S, A>(came_from: &HashMap<S, Step<S, A>>, goal: &S) -> (Vec<A>, f64)
where
    S: Eq + std::hash::Hash,
    A: Clone,
{
    let mut steps: Vec<&Step<S, A>> = Vec::new();
    let mut current = goal;
    while let Some(step) = came_from.get(current) {
        steps.push(step);
        current = &step.parent;
    }
    steps.reverse();

    let cost = steps.iter().fold(0.0, |acc, step| acc + step.cost);
    let actions = steps.into_iter().map(|step| step.action.clone()).collect();
    (actions, cost)
}
