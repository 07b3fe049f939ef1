//! Small fixed worlds with known answers.
//!
//! Each graph is small enough for exhaustive simple-path enumeration, which
//! is the oracle the lock tests compare search results against.

use wayfinder_harness::worlds::graph::WeightedGraph;
use wayfinder_harness::worlds::maze::Maze;
use wayfinder_search::{SearchProblem, Successor};

/// Named finite graphs, each with a reachable goal.
#[must_use]
pub fn reachable_graphs() -> Vec<(&'static str, WeightedGraph)> {
    vec![
        ("diamond", WeightedGraph::diamond()),
        (
            "long_but_cheap",
            WeightedGraph::from_edges(
                "S",
                &["G"],
                &[
                    ("S", "G", 10.0),
                    ("S", "a", 1.0),
                    ("a", "b", 1.0),
                    ("b", "c", 1.0),
                    ("c", "G", 1.0),
                ],
            ),
        ),
        (
            "cycle_with_exit",
            WeightedGraph::from_edges(
                "A",
                &["E"],
                &[
                    ("A", "B", 2.0),
                    ("B", "C", 2.0),
                    ("C", "A", 2.0),
                    ("C", "D", 3.0),
                    ("B", "D", 7.0),
                    ("D", "E", 1.0),
                ],
            ),
        ),
        (
            "zero_cost_edges",
            WeightedGraph::from_edges(
                "A",
                &["D"],
                &[
                    ("A", "B", 0.0),
                    ("B", "A", 0.0),
                    ("B", "C", 0.0),
                    ("C", "D", 2.0),
                    ("A", "D", 3.0),
                ],
            ),
        ),
        (
            "two_goals",
            WeightedGraph::from_edges(
                "S",
                &["G1", "G2"],
                &[
                    ("S", "x", 4.0),
                    ("x", "G1", 4.0),
                    ("S", "y", 1.0),
                    ("y", "z", 1.0),
                    ("z", "G2", 1.0),
                ],
            ),
        ),
        (
            "fractional_costs",
            WeightedGraph::from_edges(
                "s",
                &["t"],
                &[
                    ("s", "u", 0.25),
                    ("s", "v", 0.5),
                    ("u", "v", 0.125),
                    ("u", "t", 1.5),
                    ("v", "t", 0.75),
                ],
            ),
        ),
        (
            "ladder",
            WeightedGraph::from_edges(
                "L0",
                &["R3"],
                &[
                    ("L0", "L1", 1.0),
                    ("L1", "L2", 1.0),
                    ("L2", "L3", 1.0),
                    ("R0", "R1", 1.0),
                    ("R1", "R2", 1.0),
                    ("R2", "R3", 1.0),
                    ("L0", "R0", 4.0),
                    ("L1", "R1", 3.0),
                    ("L2", "R2", 2.0),
                    ("L3", "R3", 1.0),
                ],
            ),
        ),
    ]
}

/// Graphs whose goal lies in a different component from the start.
#[must_use]
pub fn unreachable_graphs() -> Vec<(&'static str, WeightedGraph)> {
    vec![
        (
            "two_components",
            WeightedGraph::from_edges("A", &["C"], &[("A", "B", 1.0), ("C", "D", 1.0)]),
        ),
        (
            "one_way_edge",
            WeightedGraph::from_edges("A", &["B"], &[("B", "A", 1.0)]),
        ),
        (
            "cycle_without_exit",
            WeightedGraph::from_edges(
                "A",
                &["Z"],
                &[
                    ("A", "B", 1.0),
                    ("B", "C", 1.0),
                    ("C", "A", 1.0),
                    ("Z", "A", 1.0),
                ],
            ),
        ),
    ]
}

/// Layouts for maze tests, all solvable.
pub const OPEN_CORRIDOR: &str = "\
%%%%%%%%%%
%P       %
%%%%%%%% %
%.       %
%%%%%%%%%%";

pub const WALLED_ROOM: &str = "\
%%%%%%%%%
%P  %   %
% % % % %
% %   % %
% %%%%% %
%      .%
%%%%%%%%%";

/// Parsed fixture mazes, including a generated open room.
///
/// # Panics
///
/// Panics if a fixture layout fails to parse.
#[must_use]
pub fn mazes() -> Vec<(&'static str, Maze)> {
    vec![
        ("tiny", Maze::tiny()),
        ("open_corridor", Maze::parse(OPEN_CORRIDOR).expect("fixture layout")),
        ("walled_room", Maze::parse(WALLED_ROOM).expect("fixture layout")),
        ("open_room_6x9", Maze::open_room(6, 9)),
    ]
}

/// Counts from 0 up to `limit` (the goal) in steps of one (cost 1.0) or two
/// (cost 1.5). A two-step from `limit - 1` lands on `limit`.
#[derive(Debug, Clone, Copy)]
pub struct CountTo {
    pub limit: u32,
}

impl SearchProblem for CountTo {
    type State = u32;
    type Action = u32;

    fn start_state(&self) -> u32 {
        0
    }

    fn is_goal(&self, state: &u32) -> bool {
        *state == self.limit
    }

    fn successors(&self, state: &u32) -> Vec<Successor<u32, u32>> {
        if *state >= self.limit {
            return Vec::new();
        }
        vec![
            Successor::new(state + 1, 1, 1.0),
            Successor::new((state + 2).min(self.limit), 2, 1.5),
        ]
    }

    fn action_sequence_cost(&self, actions: &[u32]) -> Option<f64> {
        let mut state = 0u32;
        let mut total = 0.0;
        for &step in actions {
            if state >= self.limit {
                return None;
            }
            let edge = self
                .successors(&state)
                .into_iter()
                .find(|s| s.action == step)?;
            state = edge.state;
            total += edge.cost;
        }
        Some(total)
    }
}
