use crate::search::{
    search_engines::SearchStrategy, Board, BoardError, Coordinate, HeuristicName, HeuristicValue,
    SearchNode, SearchProblem, SearchState,
};
use std::{
    hash::{Hash, Hasher},
    rc::Rc,
};

/// Upper bound on the nodes a test search may expand. Every board and graph
/// used in tests is solved or exhausted well within it, so running into it
/// means the search no longer terminates.
pub const MAX_TEST_EXPANSIONS: usize = 100_000;

/// Every node `strategy` returns, in order, until the fringe runs empty.
pub fn expand_all<S, T>(strategy: &mut T) -> Vec<SearchNode<S>>
where
    S: SearchState,
    T: SearchStrategy<S> + ?Sized,
{
    let nodes: Vec<_> = std::iter::from_fn(|| strategy.next_node())
        .take(MAX_TEST_EXPANSIONS)
        .collect();
    assert!(
        nodes.len() < MAX_TEST_EXPANSIONS,
        "search did not finish within {} expansions",
        MAX_TEST_EXPANSIONS
    );
    nodes
}

/// Search `problem` from scratch and return the first goal node expanded.
pub fn find_goal<P>(
    strategy: &mut dyn SearchStrategy<P::State>,
    problem: P,
) -> Option<SearchNode<P::State>>
where
    P: SearchProblem + 'static,
{
    let problem = Rc::new(problem);
    strategy.init(problem.clone());
    let goal = std::iter::from_fn(|| strategy.next_node())
        .take(MAX_TEST_EXPANSIONS)
        .find(|node| problem.is_goal(node.state()));
    assert!(
        goal.is_some() || strategy.num_states_expanded() < MAX_TEST_EXPANSIONS,
        "search did not finish within {} expansions",
        MAX_TEST_EXPANSIONS
    );
    goal
}

/// Start, one mouse, water and the exit. The cheapest solution walks along
/// the top row and steps down onto the exit: cost 4.
pub const SMALL_BOARD_TEXT: &str = "s m \n  we\n";

/// Three by three board without water or mice, start top centre and exit
/// bottom right.
pub const OPEN_BOARD_TEXT: &str = " s \n   \n  e\n";

/// A single row where the only way to the exit is through the water.
pub const FORCED_WATER_BOARD_TEXT: &str = "smwe\n";

/// Start top left, mice in two corners and the exit bottom left, with a
/// strip of water in the middle.
pub const CORNERS_BOARD_TEXT: &str = "s   m\n ww  \n ww  \ne   m\n";

/// A state of [`TestProblem`], identified by its coordinate only.
#[derive(Debug, Clone)]
pub struct TestState {
    coordinate: Coordinate,
    action: String,
    cost: f64,
    distance: HeuristicValue,
}

impl TestState {
    pub fn start(x: i32, y: i32) -> Self {
        Self {
            coordinate: Coordinate::new(x, y),
            action: String::new(),
            cost: 0.,
            distance: (0.).into(),
        }
    }

    pub fn moved(x: i32, y: i32, action: &str, cost: f64) -> Self {
        Self {
            coordinate: Coordinate::new(x, y),
            action: action.to_string(),
            cost,
            distance: (0.).into(),
        }
    }
}

impl PartialEq for TestState {
    fn eq(&self, other: &Self) -> bool {
        self.coordinate == other.coordinate
    }
}

impl Eq for TestState {}

impl Hash for TestState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinate.hash(state);
    }
}

impl SearchState for TestState {
    fn agent_coordinate(&self) -> Coordinate {
        self.coordinate
    }

    fn cost(&self) -> f64 {
        self.cost
    }

    fn distance(&self) -> HeuristicValue {
        self.distance
    }

    fn action(&self) -> &str {
        &self.action
    }
}

/// A weighted directed graph laid out on a single row: vertex `i` is at
/// `(i, 0)`. Edges are generated in the order they were added, which makes
/// it easy to write down exact expansion orders.
#[derive(Debug, Clone)]
pub struct TestProblem {
    num_vertices: usize,
    edges: Vec<(usize, usize, f64)>,
    estimates: Vec<f64>,
    goal: usize,
    use_estimates: bool,
}

impl TestProblem {
    pub fn new(num_vertices: usize, goal: usize) -> Self {
        Self {
            num_vertices,
            edges: vec![],
            estimates: vec![0.; num_vertices],
            goal,
            use_estimates: false,
        }
    }

    pub fn with_edge(mut self, from: usize, to: usize, cost: f64) -> Self {
        self.edges.push((from, to, cost));
        self
    }

    /// Estimates used by every heuristic other than [`HeuristicName::None`].
    pub fn with_estimates(mut self, estimates: &[f64]) -> Self {
        assert_eq!(estimates.len(), self.num_vertices);
        self.estimates = estimates.to_vec();
        self
    }

    fn estimate(&self, vertex: usize) -> HeuristicValue {
        if self.use_estimates {
            self.estimates[vertex].into()
        } else {
            (0.).into()
        }
    }
}

impl SearchProblem for TestProblem {
    type State = TestState;

    fn set_heuristic(&mut self, heuristic: HeuristicName) {
        self.use_estimates = heuristic != HeuristicName::None;
    }

    fn start_state(&self) -> TestState {
        TestState {
            distance: self.estimate(0),
            ..TestState::start(0, 0)
        }
    }

    fn is_goal(&self, state: &TestState) -> bool {
        state.coordinate.x as usize == self.goal
    }

    fn successors(&self, state: &TestState) -> Vec<TestState> {
        let from = state.coordinate.x as usize;
        self.edges
            .iter()
            .filter(|(source, _, _)| *source == from)
            .map(|&(_, to, cost)| TestState {
                distance: self.estimate(to),
                ..TestState::moved(to as i32, 0, &format!("to{}", to), cost)
            })
            .collect()
    }

    fn load_board_text(&mut self, _text: &str) -> Result<Board, BoardError> {
        Ok(Board::new(1, self.num_vertices))
    }
}
