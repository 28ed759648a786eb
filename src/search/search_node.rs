use crate::search::{Coordinate, HeuristicValue, SearchState};
use std::collections::HashSet;

/// A [`SearchNode`] is an entry of a search fringe. Next to the state itself
/// it records the full path taken from the start state, the cost of that path
/// and the priority the search strategy assigned to the node.
///
/// Path data is never shared between nodes. A child copies its parent's path
/// and extends the copy, so expanding one node can never change the path of
/// another.
#[derive(Debug, Clone)]
pub struct SearchNode<S>
where
    S: SearchState,
{
    /// The state this node represents
    state: S,
    /// Actions taken from the start state, in order
    path_actions: Vec<String>,
    /// Agent coordinates visited after the start state, in order
    path_coordinates: Vec<Coordinate>,
    /// Every state on the path, including the start state
    path_states: HashSet<S>,
    /// Backward cost, i.e. the sum of the edge costs along the path
    cost: f64,
    /// Ordering value, only meaningful to priority ordered strategies
    priority: HeuristicValue,
}

impl<S> SearchNode<S>
where
    S: SearchState,
{
    /// Create the root node of a search, its path consists of the start state
    /// only.
    pub fn new_root(state: S, priority: HeuristicValue) -> Self {
        let path_states = HashSet::from([state.clone()]);
        Self {
            state,
            path_actions: vec![],
            path_coordinates: vec![],
            path_states,
            cost: 0.,
            priority,
        }
    }

    /// Create the node reached by moving from this node into `successor`.
    /// `priority` receives the child's backward cost and the successor's
    /// distance estimate.
    pub fn child<F>(&self, successor: S, priority: F) -> Self
    where
        F: Fn(f64, HeuristicValue) -> HeuristicValue,
    {
        let cost = self.cost + successor.cost();

        let mut path_actions = self.path_actions.clone();
        path_actions.push(successor.action().to_string());
        let mut path_coordinates = self.path_coordinates.clone();
        path_coordinates.push(successor.agent_coordinate());
        let mut path_states = self.path_states.clone();
        path_states.insert(successor.clone());

        let priority = priority(cost, successor.distance());
        Self {
            state: successor,
            path_actions,
            path_coordinates,
            path_states,
            cost,
            priority,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn path_actions(&self) -> &[String] {
        &self.path_actions
    }

    pub fn path_coordinates(&self) -> &[Coordinate] {
        &self.path_coordinates
    }

    /// Whether `state` already appears on the path leading to this node.
    pub fn is_on_path(&self, state: &S) -> bool {
        self.path_states.contains(state)
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn priority(&self) -> HeuristicValue {
        self.priority
    }

    /// Number of transitions from the start state to this node.
    pub fn path_len(&self) -> usize {
        self.path_actions.len()
    }

    pub fn into_state(self) -> S {
        self.state
    }
}
