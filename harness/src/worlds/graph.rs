//! `WeightedGraph`: an explicit weighted digraph with named nodes.
//!
//! States are node names; the action for an edge is the `(from, to)` pair.
//! Successors are returned in edge insertion order, so search results are
//! reproducible.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use wayfinder_search::{SearchProblem, Successor};

/// Traversal of one edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeAction {
    pub from: String,
    pub to: String,
}

impl EdgeAction {
    #[must_use]
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

impl std::fmt::Display for EdgeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Weighted directed graph with one start node and a set of goal nodes.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    start: String,
    goals: BTreeSet<String>,
    /// Outgoing edges per node, in insertion order.
    edges: BTreeMap<String, Vec<(String, f64)>>,
}

impl WeightedGraph {
    #[must_use]
    pub fn new(start: &str) -> Self {
        Self {
            start: start.to_string(),
            ..Self::default()
        }
    }

    /// Build from an edge list.
    #[must_use]
    pub fn from_edges(start: &str, goals: &[&str], edges: &[(&str, &str, f64)]) -> Self {
        let mut graph = Self::new(start);
        for goal in goals {
            graph.add_goal(goal);
        }
        for &(from, to, cost) in edges {
            graph.add_edge(from, to, cost);
        }
        graph
    }

    /// The four-node diamond: `A→B 1, A→C 5, B→D 1, C→D 1`, goal `D`.
    #[must_use]
    pub fn diamond() -> Self {
        Self::from_edges(
            "A",
            &["D"],
            &[
                ("A", "B", 1.0),
                ("A", "C", 5.0),
                ("B", "D", 1.0),
                ("C", "D", 1.0),
            ],
        )
    }

    /// Add or replace the edge `from → to`.
    pub fn add_edge(&mut self, from: &str, to: &str, cost: f64) -> &mut Self {
        let out = self.edges.entry(from.to_string()).or_default();
        match out.iter_mut().find(|(target, _)| target == to) {
            Some(existing) => existing.1 = cost,
            None => out.push((to.to_string(), cost)),
        }
        self
    }

    pub fn add_goal(&mut self, goal: &str) -> &mut Self {
        self.goals.insert(goal.to_string());
        self
    }

    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Cost of the edge `from → to`, if present.
    #[must_use]
    pub fn edge_cost(&self, from: &str, to: &str) -> Option<f64> {
        self.edges
            .get(from)?
            .iter()
            .find(|(target, _)| target == to)
            .map(|&(_, cost)| cost)
    }

    /// Every node named by the start, a goal or an edge.
    #[must_use]
    pub fn nodes(&self) -> BTreeSet<&str> {
        let mut nodes: BTreeSet<&str> = BTreeSet::new();
        nodes.insert(self.start.as_str());
        nodes.extend(self.goals.iter().map(String::as_str));
        for (from, out) in &self.edges {
            nodes.insert(from.as_str());
            nodes.extend(out.iter().map(|(to, _)| to.as_str()));
        }
        nodes
    }

    /// Every simple path from the start to a goal, as edge lists.
    ///
    /// Exponential; meant for checking search results on small graphs.
    #[must_use]
    pub fn simple_goal_paths(&self) -> Vec<Vec<EdgeAction>> {
        let mut paths = Vec::new();
        let mut on_path: HashSet<&str> = HashSet::new();
        let mut prefix = Vec::new();
        self.collect_paths(&self.start, &mut on_path, &mut prefix, &mut paths);
        paths
    }

    fn collect_paths<'g>(
        &'g self,
        node: &'g str,
        on_path: &mut HashSet<&'g str>,
        prefix: &mut Vec<EdgeAction>,
        paths: &mut Vec<Vec<EdgeAction>>,
    ) {
        if self.goals.contains(node) {
            paths.push(prefix.clone());
        }
        on_path.insert(node);
        for (to, _) in self.edges.get(node).into_iter().flatten() {
            if on_path.contains(to.as_str()) {
                continue;
            }
            prefix.push(EdgeAction::new(node, to));
            self.collect_paths(to, on_path, prefix, paths);
            prefix.pop();
        }
        on_path.remove(node);
    }

    /// Cheapest start-to-goal cost by exhaustive enumeration of simple paths.
    #[must_use]
    pub fn exhaustive_min_cost(&self) -> Option<f64> {
        self.simple_goal_paths()
            .iter()
            .filter_map(|path| self.action_sequence_cost(path))
            .min_by(f64::total_cmp)
    }

    /// Fewest edges on any start-to-goal path, by exhaustive enumeration.
    #[must_use]
    pub fn exhaustive_min_edges(&self) -> Option<usize> {
        self.simple_goal_paths().iter().map(Vec::len).min()
    }
}

impl SearchProblem for WeightedGraph {
    type State = String;
    type Action = EdgeAction;

    fn start_state(&self) -> String {
        self.start.clone()
    }

    fn is_goal(&self, state: &String) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &String) -> Vec<Successor<String, EdgeAction>> {
        self.edges
            .get(state)
            .into_iter()
            .flatten()
            .map(|(to, cost)| Successor::new(to.clone(), EdgeAction::new(state, to), *cost))
            .collect()
    }

    fn action_sequence_cost(&self, actions: &[EdgeAction]) -> Option<f64> {
        let mut current = self.start.as_str();
        let mut total = 0.0;
        for action in actions {
            if action.from != current {
                return None;
            }
            total += self.edge_cost(&action.from, &action.to)?;
            current = action.to.as_str();
        }
        Some(total)
    }
}
