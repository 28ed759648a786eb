use crate::search::{Coordinate, HeuristicValue};
use std::{fmt::Debug, hash::Hash};

/// A state of a grid search problem.
///
/// Equality and hashing must only consider the logical content of the state,
/// i.e. whatever determines which states are reachable from it and whether it
/// is a goal. Two states reached along different paths (and hence with
/// different actions, costs or estimates) but with the same logical content
/// are the same state, which is what duplicate detection relies on.
pub trait SearchState: Clone + Eq + Hash + Debug {
    /// Where the agent is in this state.
    fn agent_coordinate(&self) -> Coordinate;

    /// Cost of the single transition that produced this state. This is not
    /// cumulative, see [`crate::search::SearchNode::cost`] for that.
    fn cost(&self) -> f64;

    /// Estimated remaining cost to a goal, under whichever heuristic the
    /// problem had selected when the state was created.
    fn distance(&self) -> HeuristicValue;

    /// Label of the transition that produced this state, empty for the start
    /// state.
    fn action(&self) -> &str;
}
