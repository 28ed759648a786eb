use crate::search::{
    search_engines::{BestFirstSearch, SearchStatistics, BFS, DFS},
    SearchNode, SearchProblem, SearchState,
};
use std::{fmt::Debug, rc::Rc};

/// How successors that were seen before are filtered out during expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Skip a successor if its state is already on the path of the node being
    /// expanded. States can still be reached, and expanded, more than once
    /// along different paths.
    #[default]
    Tree,
    /// Skip a successor if its state was ever added to the fringe during this
    /// search. No state is expanded more than once.
    Graph,
}

/// A search strategy explores a problem one node at a time. Strategies only
/// differ in the order in which they take nodes from their fringe.
pub trait SearchStrategy<S: SearchState>: Debug {
    /// Start a new search of `problem`, dropping everything from a previous
    /// search. The fringe holds the root node only afterwards.
    fn init(&mut self, problem: Rc<dyn SearchProblem<State = S>>);

    /// Pop the next node off the fringe, add its successors to the fringe
    /// and return it. Returns `None` once the fringe is empty (or before
    /// [`SearchStrategy::init`] is called), which means the search space is
    /// exhausted.
    fn next_node(&mut self) -> Option<SearchNode<S>>;

    /// Statistics of the current search, `None` before the first call to
    /// [`SearchStrategy::init`].
    fn statistics(&self) -> Option<&SearchStatistics>;

    /// Number of nodes returned by [`SearchStrategy::next_node`] since the
    /// last call to [`SearchStrategy::init`].
    fn num_states_expanded(&self) -> usize {
        self.statistics()
            .map_or(0, SearchStatistics::expanded_nodes)
    }

    /// Largest fringe size since the last call to [`SearchStrategy::init`].
    fn max_fringe_size(&self) -> usize {
        self.statistics()
            .map_or(1, SearchStatistics::max_fringe_size)
    }

    fn name(&self) -> &'static str;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchStrategyName {
    #[clap(name = "bfs", help = "Breadth first search.")]
    BFS,
    #[clap(name = "dfs", help = "Depth first search.")]
    DFS,
    #[clap(name = "ucs", help = "Uniform cost search, ordered by path cost.")]
    UniformCost,
    #[clap(help = "Greedy best first search, ordered by the heuristic estimate.")]
    Greedy,
    #[clap(
        name = "astar",
        help = "A* search, ordered by path cost plus the heuristic estimate."
    )]
    AStar,
}

impl SearchStrategyName {
    pub fn create<S: SearchState + 'static>(&self, mode: SearchMode) -> Box<dyn SearchStrategy<S>> {
        match self {
            SearchStrategyName::BFS => Box::new(BFS::new(mode)),
            SearchStrategyName::DFS => Box::new(DFS::new(mode)),
            SearchStrategyName::UniformCost => Box::new(BestFirstSearch::uniform_cost(mode)),
            SearchStrategyName::Greedy => Box::new(BestFirstSearch::greedy(mode)),
            SearchStrategyName::AStar => Box::new(BestFirstSearch::astar(mode)),
        }
    }
}
