use crate::search::{HeuristicValue, SearchNode, SearchState};
use priority_queue::PriorityQueue;
use std::{
    cmp::Reverse,
    hash::{Hash, Hasher},
};

/// A fringe entry, identified by the order in which it was pushed. Nodes
/// themselves are not hashable (and two distinct entries may well hold equal
/// states), so the queue keys on the sequence number.
#[derive(Debug)]
struct FringeEntry<S: SearchState> {
    sequence: usize,
    node: SearchNode<S>,
}

impl<S: SearchState> PartialEq for FringeEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.sequence == other.sequence
    }
}

impl<S: SearchState> Eq for FringeEntry<S> {}

impl<S: SearchState> Hash for FringeEntry<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sequence.hash(state);
    }
}

/// A min-priority fringe. Nodes with equal priority are popped in the order
/// they were pushed.
#[derive(Debug)]
pub struct PriorityFringe<S: SearchState> {
    queue: PriorityQueue<FringeEntry<S>, Reverse<(HeuristicValue, usize)>>,
    next_sequence: usize,
}

impl<S: SearchState> Default for PriorityFringe<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SearchState> PriorityFringe<S> {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, node: SearchNode<S>) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        let priority = Reverse((node.priority(), sequence));
        self.queue.push(FringeEntry { sequence, node }, priority);
    }

    pub fn pop(&mut self) -> Option<SearchNode<S>> {
        self.queue.pop().map(|(entry, _)| entry.node)
    }

    /// Number of nodes pushed since the fringe was created or cleared.
    pub fn num_pushed(&self) -> usize {
        self.next_sequence
    }

    /// Drop every node and start numbering pushes from zero again.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.next_sequence = 0;
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestState;

    fn node(x: i32, priority: f64) -> SearchNode<TestState> {
        SearchNode::new_root(TestState::start(x, 0), priority.into())
    }

    #[test]
    fn pops_lowest_priority_first() {
        let mut fringe = PriorityFringe::new();
        fringe.push(node(0, 3.));
        fringe.push(node(1, 1.));
        fringe.push(node(2, 2.));

        let order: Vec<i32> = std::iter::from_fn(|| fringe.pop())
            .map(|n| n.state().agent_coordinate().x)
            .collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut fringe = PriorityFringe::new();
        for x in 0..5 {
            fringe.push(node(x, 1.));
        }
        fringe.push(node(9, 0.5));
        assert_eq!(fringe.len(), 6);

        let order: Vec<i32> = std::iter::from_fn(|| fringe.pop())
            .map(|n| n.state().agent_coordinate().x)
            .collect();
        assert_eq!(order, vec![9, 0, 1, 2, 3, 4]);
        assert!(fringe.is_empty());
    }

    #[test]
    fn equal_states_are_separate_entries() {
        let mut fringe = PriorityFringe::new();
        fringe.push(node(0, 2.));
        fringe.push(node(0, 1.));
        assert_eq!(fringe.len(), 2);
        assert_eq!(fringe.pop().unwrap().priority().into_inner(), 1.);
        assert_eq!(fringe.pop().unwrap().priority().into_inner(), 2.);
    }

    #[test]
    fn clear_restarts_the_sequence() {
        let mut fringe = PriorityFringe::new();
        fringe.push(node(0, 1.));
        fringe.push(node(1, 1.));
        assert_eq!(fringe.num_pushed(), 2);

        fringe.clear();
        assert!(fringe.is_empty());
        assert_eq!(fringe.num_pushed(), 0);
        fringe.push(node(2, 1.));
        fringe.push(node(3, 1.));
        assert_eq!(fringe.pop().unwrap().state().agent_coordinate().x, 2);
    }
}
