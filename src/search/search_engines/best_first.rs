//! Best first search. Uniform cost search, greedy best first search and A*
//! only differ in how a node's priority is computed from its backward cost
//! `g` and its distance estimate `h`.

use crate::search::{
    search_engines::{
        Expander, PriorityFringe, PriorityFunction, SearchMode, SearchStatistics, SearchStrategy,
    },
    SearchNode, SearchProblem, SearchState,
};
use std::rc::Rc;

/// What a best first search orders its fringe by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// `g(x)`, the backward cost
    Cost,
    /// `h(x)`, the distance estimate
    Estimate,
    /// `f(x) = g(x) + h(x)`
    CostPlusEstimate,
}

impl Evaluation {
    fn priority_function(&self) -> PriorityFunction {
        match self {
            Evaluation::Cost => |g, _h| g.into(),
            Evaluation::Estimate => |_g, h| h,
            Evaluation::CostPlusEstimate => |g, h| h + g,
        }
    }
}

#[derive(Debug)]
pub struct BestFirstSearch<S: SearchState> {
    evaluation: Evaluation,
    mode: SearchMode,
    expander: Option<Expander<S>>,
    fringe: PriorityFringe<S>,
}

impl<S: SearchState> BestFirstSearch<S> {
    pub fn new(evaluation: Evaluation, mode: SearchMode) -> Self {
        Self {
            evaluation,
            mode,
            expander: None,
            fringe: PriorityFringe::new(),
        }
    }

    /// Uniform cost search, expands the cheapest node first.
    pub fn uniform_cost(mode: SearchMode) -> Self {
        Self::new(Evaluation::Cost, mode)
    }

    /// Greedy best first search, expands the node estimated to be closest to
    /// a goal first.
    pub fn greedy(mode: SearchMode) -> Self {
        Self::new(Evaluation::Estimate, mode)
    }

    /// A*, expands the node with the lowest estimated total cost first.
    pub fn astar(mode: SearchMode) -> Self {
        Self::new(Evaluation::CostPlusEstimate, mode)
    }

    pub fn evaluation(&self) -> Evaluation {
        self.evaluation
    }
}

impl<S: SearchState> SearchStrategy<S> for BestFirstSearch<S> {
    fn init(&mut self, problem: Rc<dyn SearchProblem<State = S>>) {
        let mut expander = Expander::new(problem, self.mode, self.evaluation.priority_function());
        self.fringe.clear();
        self.fringe.push(expander.root());
        self.expander = Some(expander);
    }

    fn next_node(&mut self) -> Option<SearchNode<S>> {
        let expander = self.expander.as_mut()?;
        let node = self.fringe.pop()?;

        for child in expander.expand(&node) {
            self.fringe.push(child);
        }
        expander
            .statistics_mut()
            .register_expansion(self.fringe.len());

        Some(node)
    }

    fn statistics(&self) -> Option<&SearchStatistics> {
        self.expander.as_ref().map(Expander::statistics)
    }

    fn name(&self) -> &'static str {
        match self.evaluation {
            Evaluation::Cost => "ucs",
            Evaluation::Estimate => "greedy",
            Evaluation::CostPlusEstimate => "astar",
        }
    }
}
