//! Depth first search

use crate::search::{
    search_engines::{Expander, SearchMode, SearchStatistics, SearchStrategy},
    HeuristicValue, SearchNode, SearchProblem, SearchState,
};
use std::rc::Rc;

/// Depth first search: the most recently generated node is expanded next.
/// Successors are pushed in the order the problem generates them, so the
/// last successor is explored first.
#[derive(Debug)]
pub struct DFS<S: SearchState> {
    mode: SearchMode,
    expander: Option<Expander<S>>,
    stack: Vec<SearchNode<S>>,
}

impl<S: SearchState> DFS<S> {
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            expander: None,
            stack: Vec::new(),
        }
    }
}

fn no_priority(_g: f64, _h: HeuristicValue) -> HeuristicValue {
    (0.).into()
}

impl<S: SearchState> SearchStrategy<S> for DFS<S> {
    fn init(&mut self, problem: Rc<dyn SearchProblem<State = S>>) {
        let mut expander = Expander::new(problem, self.mode, no_priority);
        self.stack.clear();
        self.stack.push(expander.root());
        self.expander = Some(expander);
    }

    fn next_node(&mut self) -> Option<SearchNode<S>> {
        let expander = self.expander.as_mut()?;
        let node = self.stack.pop()?;

        self.stack.extend(expander.expand(&node));
        expander
            .statistics_mut()
            .register_expansion(self.stack.len());

        Some(node)
    }

    fn statistics(&self) -> Option<&SearchStatistics> {
        self.expander.as_ref().map(Expander::statistics)
    }

    fn name(&self) -> &'static str {
        "dfs"
    }
}
