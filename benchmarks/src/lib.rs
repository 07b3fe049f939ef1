//! Shared worlds for wayfinder benchmark suites.

use wayfinder_harness::worlds::graph::WeightedGraph;
use wayfinder_harness::worlds::maze::{stay_east_cost, Maze};

/// A named maze regime.
pub struct Regime {
    pub name: &'static str,
    pub maze: Maze,
}

/// Maze regimes ordered roughly by search effort.
#[must_use]
pub fn maze_regimes() -> Vec<Regime> {
    vec![
        Regime {
            name: "tiny",
            maze: Maze::tiny(),
        },
        Regime {
            name: "open_room_20x20",
            maze: Maze::open_room(20, 20),
        },
        Regime {
            name: "open_room_40x60",
            maze: Maze::open_room(40, 60),
        },
        Regime {
            name: "open_room_20x20_stay_east",
            maze: Maze::open_room(20, 20).with_cost_fn(stay_east_cost),
        },
    ]
}

/// A layered graph: `layers` layers of `width` nodes, every node linked to
/// every node of the next layer. Costs vary deterministically with the
/// node indices so that cost-based strategies see many stale entries.
///
/// The start is `L0_0`; the goal is the single node of an extra final layer.
#[must_use]
pub fn layered_graph(layers: usize, width: usize) -> WeightedGraph {
    let node = |layer: usize, i: usize| format!("L{layer}_{i}");
    let goal = format!("L{layers}_0");
    let mut graph = WeightedGraph::new(&node(0, 0));
    graph.add_goal(&goal);

    for layer in 0..layers {
        let sources = if layer == 0 { 1 } else { width };
        let targets = if layer + 1 == layers { 1 } else { width };
        for from in 0..sources {
            for to in 0..targets {
                let cost = step_cost(layer, from, to);
                graph.add_edge(&node(layer, from), &node(layer + 1, to), cost);
            }
        }
    }
    graph
}

#[allow(clippy::cast_precision_loss)]
fn step_cost(layer: usize, from: usize, to: usize) -> f64 {
    let mix = (layer * 31 + from * 17 + to * 7) % 13;
    1.0 + mix as f64 * 0.25
}
