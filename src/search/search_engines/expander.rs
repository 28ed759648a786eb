use crate::search::{
    search_engines::{SearchMode, SearchStatistics},
    HeuristicValue, SearchNode, SearchProblem, SearchState,
};
use std::{collections::HashSet, fmt, rc::Rc};
use tracing::debug;

/// Computes the priority of a node from its backward cost and its state's
/// distance estimate.
pub type PriorityFunction = fn(f64, HeuristicValue) -> HeuristicValue;

/// The part of a search that does not depend on the fringe: turning a node
/// into the child nodes that should be added to the fringe, filtering out
/// duplicates, and keeping statistics.
pub struct Expander<S: SearchState> {
    problem: Rc<dyn SearchProblem<State = S>>,
    mode: SearchMode,
    /// Every state ever added to the fringe, only used in graph search
    seen: HashSet<S>,
    priority: PriorityFunction,
    statistics: SearchStatistics,
}

impl<S: SearchState> Expander<S> {
    pub fn new(
        problem: Rc<dyn SearchProblem<State = S>>,
        mode: SearchMode,
        priority: PriorityFunction,
    ) -> Self {
        debug!(mode = ?mode, "starting search");
        Self {
            problem,
            mode,
            seen: HashSet::new(),
            priority,
            statistics: SearchStatistics::new(),
        }
    }

    /// The node to seed the fringe with.
    pub fn root(&mut self) -> SearchNode<S> {
        let start = self.problem.start_state();
        if self.mode == SearchMode::Graph {
            self.seen.insert(start.clone());
        }
        let priority = (self.priority)(0., start.distance());
        SearchNode::new_root(start, priority)
    }

    /// The children of `node` that should go onto the fringe, in the order
    /// the problem generates successors.
    pub fn expand(&mut self, node: &SearchNode<S>) -> Vec<SearchNode<S>> {
        let mut children = vec![];
        let mut pruned = 0;
        for successor in self.problem.successors(node.state()) {
            let is_duplicate = match self.mode {
                SearchMode::Tree => node.is_on_path(&successor),
                // states are marked as seen when they are generated, so two
                // nodes can never put the same state onto the fringe
                SearchMode::Graph => !self.seen.insert(successor.clone()),
            };
            if is_duplicate {
                pruned += 1;
                continue;
            }
            children.push(node.child(successor, self.priority));
        }
        self.statistics.increment_generated_nodes(children.len());
        self.statistics.increment_pruned_nodes(pruned);
        children
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    pub fn statistics_mut(&mut self) -> &mut SearchStatistics {
        &mut self.statistics
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Whether `state` has been added to the fringe in this (graph) search.
    pub fn has_seen(&self, state: &S) -> bool {
        self.seen.contains(state)
    }
}

impl<S: SearchState> fmt::Debug for Expander<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expander")
            .field("problem", &self.problem)
            .field("mode", &self.mode)
            .field("seen", &self.seen.len())
            .field("statistics", &self.statistics)
            .finish()
    }
}
