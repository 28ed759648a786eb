pub mod grid_distance;
mod heuristic;

pub use heuristic::{HeuristicName, HeuristicValue};
