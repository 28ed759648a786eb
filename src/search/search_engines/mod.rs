mod best_first;
mod bfs;
mod dfs;
mod expander;
mod priority_fringe;
mod search_engine;
mod search_statistics;

pub use best_first::{BestFirstSearch, Evaluation};
pub use bfs::BFS;
pub use dfs::DFS;
pub use expander::{Expander, PriorityFunction};
pub use priority_fringe::PriorityFringe;
pub use search_engine::{SearchMode, SearchStrategy, SearchStrategyName};
pub use search_statistics::SearchStatistics;
