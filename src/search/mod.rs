mod board;
mod coordinate;
mod driver;
mod errors;
pub mod heuristics;
pub mod problem_formulations;
pub mod search_engines;
mod search_node;
mod search_state;
mod verbosity;

pub use board::{Board, Colour, PathDirection};
pub use coordinate::Coordinate;
pub use driver::{DriverStatus, SearchDriver, SolutionSummary};
pub use errors::BoardError;
pub use heuristics::{HeuristicName, HeuristicValue};
pub use problem_formulations::SearchProblem;
pub use search_node::SearchNode;
pub use search_state::SearchState;
pub use verbosity::Verbosity;
