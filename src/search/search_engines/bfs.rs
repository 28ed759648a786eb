//! Breadth first search

use crate::search::{
    search_engines::{Expander, SearchMode, SearchStatistics, SearchStrategy},
    HeuristicValue, SearchNode, SearchProblem, SearchState,
};
use std::{collections::VecDeque, rc::Rc};

/// Breadth first search: nodes are expanded in the order they were generated,
/// so states closer to the start (in number of moves) are expanded first.
#[derive(Debug)]
pub struct BFS<S: SearchState> {
    mode: SearchMode,
    expander: Option<Expander<S>>,
    queue: VecDeque<SearchNode<S>>,
}

impl<S: SearchState> BFS<S> {
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            expander: None,
            queue: VecDeque::new(),
        }
    }
}

fn no_priority(_g: f64, _h: HeuristicValue) -> HeuristicValue {
    (0.).into()
}

impl<S: SearchState> SearchStrategy<S> for BFS<S> {
    fn init(&mut self, problem: Rc<dyn SearchProblem<State = S>>) {
        let mut expander = Expander::new(problem, self.mode, no_priority);
        self.queue.clear();
        self.queue.push_back(expander.root());
        self.expander = Some(expander);
    }

    fn next_node(&mut self) -> Option<SearchNode<S>> {
        let expander = self.expander.as_mut()?;
        let node = self.queue.pop_front()?;

        self.queue.extend(expander.expand(&node));
        expander
            .statistics_mut()
            .register_expansion(self.queue.len());

        Some(node)
    }

    fn statistics(&self) -> Option<&SearchStatistics> {
        self.expander.as_ref().map(Expander::statistics)
    }

    fn name(&self) -> &'static str {
        "bfs"
    }
}
