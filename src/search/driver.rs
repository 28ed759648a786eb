//! Runs one search strategy against one problem, one expansion at a time, and
//! narrates the search on a [`Board`] for whoever displays it.

use crate::search::{
    search_engines::SearchStrategy, Board, BoardError, Colour, Coordinate, PathDirection,
    SearchNode, SearchProblem, SearchState,
};
use itertools::Itertools;
use std::{
    fmt::{self, Display, Formatter},
    path::Path,
    rc::Rc,
};
use tracing::{debug, info};

const ALPHA_START: u8 = 15;
const ALPHA_STEP: u8 = 2;

/// Where a driven search is at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverStatus {
    Searching,
    SolutionFound,
    /// The fringe ran empty without reaching a goal, there is no solution.
    Exhausted,
}

/// What is reported once a solution is found.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionSummary {
    pub strategy: String,
    pub states_expanded: usize,
    pub max_fringe_size: usize,
    pub cost: f64,
    pub path_len: usize,
    /// The first character of every action on the path
    pub action_codes: String,
}

impl Display for SolutionSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search strategy: {}", self.strategy)?;
        writeln!(f, "States expanded: {}", self.states_expanded)?;
        writeln!(f, "Max fringe size: {}", self.max_fringe_size)?;
        writeln!(f, "Solution cost: {}", self.cost)?;
        writeln!(f, "Solution path length: {}", self.path_len)?;
        write!(f, "Solution path (actions): {}", self.action_codes)
    }
}

#[derive(Debug)]
pub struct SearchDriver<S: SearchState> {
    problem: Rc<dyn SearchProblem<State = S>>,
    strategy: Box<dyn SearchStrategy<S>>,
    board: Board,
    start: Coordinate,
    status: DriverStatus,
    /// Opacity used to shade the next expanded spot
    alpha: u8,
    solution: Option<SearchNode<S>>,
    summary: Option<SolutionSummary>,
}

impl<S: SearchState + 'static> SearchDriver<S> {
    /// Load the board at `board_path` into `problem` and start searching it
    /// with `strategy`.
    pub fn new<P>(
        mut problem: P,
        strategy: Box<dyn SearchStrategy<S>>,
        board_path: &Path,
    ) -> Result<Self, BoardError>
    where
        P: SearchProblem<State = S> + 'static,
    {
        let board = problem.load_board_file(board_path)?;
        Ok(Self::with_board(problem, strategy, board))
    }

    /// Start searching `problem`, which already holds its board, with
    /// `strategy`.
    pub fn with_board<P>(
        problem: P,
        mut strategy: Box<dyn SearchStrategy<S>>,
        board: Board,
    ) -> Self
    where
        P: SearchProblem<State = S> + 'static,
    {
        let problem: Rc<dyn SearchProblem<State = S>> = Rc::new(problem);
        let start = problem.start_state().agent_coordinate();
        strategy.init(problem.clone());
        info!(strategy = strategy.name(), start = %start, "driver ready");
        Self {
            problem,
            strategy,
            board,
            start,
            status: DriverStatus::Searching,
            alpha: ALPHA_START,
            solution: None,
            summary: None,
        }
    }

    /// Expand one more node. Returns whether the board may have changed,
    /// i.e. `false` once the search is over, either because the solution
    /// was found on an earlier step or because there is nothing left to
    /// expand.
    pub fn step(&mut self) -> bool {
        if self.status != DriverStatus::Searching {
            return false;
        }

        let Some(node) = self.strategy.next_node() else {
            info!("search space exhausted, no solution");
            self.status = DriverStatus::Exhausted;
            self.finalise();
            return false;
        };

        if self.problem.is_goal(node.state()) {
            self.paint_solution(&node);
            let summary = self.summarise(&node);
            info!(
                cost = summary.cost,
                path_len = summary.path_len,
                actions = %summary.action_codes,
                "solution found"
            );
            self.summary = Some(summary);
            self.solution = Some(node);
            self.status = DriverStatus::SolutionFound;
            self.finalise();
        } else {
            let coordinate = node.state().agent_coordinate();
            if coordinate != self.start {
                self.board
                    .set_colour(coordinate, Colour::rgba(0, 0, 255, self.alpha));
                self.alpha = self.alpha.saturating_add(ALPHA_STEP);
            }
        }
        true
    }

    /// Step until the search is over.
    pub fn run(&mut self) -> DriverStatus {
        while self.step() {}
        self.status
    }

    fn paint_solution(&mut self, node: &SearchNode<S>) {
        let coordinates = node.path_coordinates();
        for (i, (&current, &next)) in coordinates.iter().tuple_windows().enumerate() {
            let previous = if i == 0 { self.start } else { coordinates[i - 1] };
            let direction = PathDirection::from_steps(previous, current, next);
            debug!(spot = %current, direction = direction.code());
            self.board.set_colour(current, Colour::ORANGE);
            self.board.set_direction(current, direction);
        }
    }

    fn summarise(&self, node: &SearchNode<S>) -> SolutionSummary {
        SolutionSummary {
            strategy: self.strategy.name().to_string(),
            states_expanded: self.strategy.num_states_expanded(),
            max_fringe_size: self.strategy.max_fringe_size(),
            cost: node.cost(),
            path_len: node.path_len(),
            action_codes: node
                .path_actions()
                .iter()
                .filter_map(|action| action.chars().next())
                .join(""),
        }
    }

    fn finalise(&self) {
        if let Some(statistics) = self.strategy.statistics() {
            statistics.finalise_search();
        }
    }

    /// The snapshot to display.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> DriverStatus {
        self.status
    }

    pub fn summary(&self) -> Option<&SolutionSummary> {
        self.summary.as_ref()
    }

    /// The goal node, once found.
    pub fn solution(&self) -> Option<&SearchNode<S>> {
        self.solution.as_ref()
    }

    pub fn strategy(&self) -> &dyn SearchStrategy<S> {
        self.strategy.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        search::{
            problem_formulations::{MiceAndMeows, MiceAndMeowsState},
            search_engines::{SearchMode, SearchStrategyName, BFS},
            HeuristicName,
        },
        test_utils::*,
    };
    use std::io::Write;

    /// Step until the search is over, failing if it does not end in time.
    fn finish<S: SearchState + 'static>(driver: &mut SearchDriver<S>) -> DriverStatus {
        let steps = std::iter::from_fn(|| driver.step().then_some(()))
            .take(MAX_TEST_EXPANSIONS)
            .count();
        assert!(steps < MAX_TEST_EXPANSIONS, "search did not finish");
        driver.status()
    }

    fn mice_driver(
        text: &str,
        strategy: SearchStrategyName,
        mode: SearchMode,
    ) -> SearchDriver<MiceAndMeowsState> {
        let (problem, board) = MiceAndMeows::from_text(text).unwrap();
        SearchDriver::with_board(problem, strategy.create(mode), board)
    }

    #[test]
    fn bfs_solves_the_small_board() {
        let mut driver = mice_driver(SMALL_BOARD_TEXT, SearchStrategyName::BFS, SearchMode::Tree);
        assert_eq!(finish(&mut driver), DriverStatus::SolutionFound);

        let solution = driver.solution().unwrap();
        assert!(solution.state().mice().is_empty());
        assert_eq!(solution.state().agent_coordinate(), Coordinate::new(3, 1));
        assert_eq!(solution.cost(), 4.);

        let summary = driver.summary().unwrap();
        assert_eq!(summary.strategy, "bfs");
        assert_eq!(summary.path_len, 4);
        assert_eq!(summary.action_codes.len(), 4);
        assert!(!driver.step());
    }

    #[test]
    fn forced_water_is_reflected_in_the_cost() {
        // stepping back onto the start after catching the mouse is a new
        // state, so tree search expands it too
        let mut driver = mice_driver(
            FORCED_WATER_BOARD_TEXT,
            SearchStrategyName::BFS,
            SearchMode::Tree,
        );
        assert_eq!(finish(&mut driver), DriverStatus::SolutionFound);
        let summary = driver.summary().unwrap();
        assert_eq!(summary.cost, 8.);
        assert_eq!(summary.action_codes, "rrr");
        assert_eq!(
            summary.to_string(),
            "Search strategy: bfs\n\
             States expanded: 5\n\
             Max fringe size: 2\n\
             Solution cost: 8\n\
             Solution path length: 3\n\
             Solution path (actions): rrr"
        );
    }

    #[test]
    fn every_strategy_reaches_the_exit_with_all_mice() {
        let strategies = [
            SearchStrategyName::BFS,
            SearchStrategyName::DFS,
            SearchStrategyName::UniformCost,
            SearchStrategyName::Greedy,
            SearchStrategyName::AStar,
        ];
        for strategy in strategies {
            let (mut problem, board) = MiceAndMeows::from_text(CORNERS_BOARD_TEXT).unwrap();
            problem.set_heuristic(HeuristicName::MiceRemaining);
            let mut driver =
                SearchDriver::with_board(problem, strategy.create(SearchMode::Graph), board);
            assert_eq!(finish(&mut driver), DriverStatus::SolutionFound, "{:?}", strategy);

            let solution = driver.solution().unwrap();
            assert!(solution.state().mice().is_empty());
            assert_eq!(solution.state().agent_coordinate(), Coordinate::new(0, 3));
        }
    }

    #[test]
    fn expanded_count_matches_the_steps_taken() {
        let mut driver = mice_driver(
            SMALL_BOARD_TEXT,
            SearchStrategyName::UniformCost,
            SearchMode::Tree,
        );
        let steps = std::iter::from_fn(|| driver.step().then_some(()))
            .take(MAX_TEST_EXPANSIONS)
            .count();
        assert_eq!(driver.status(), DriverStatus::SolutionFound);
        assert_eq!(driver.strategy().num_states_expanded(), steps);
    }

    #[test]
    fn disconnected_goal_exhausts_the_search() {
        let problem = TestProblem::new(4, 3)
            .with_edge(0, 1, 1.)
            .with_edge(1, 2, 1.)
            .with_edge(2, 0, 1.);
        let board = Board::new(1, 4);
        let strategy: Box<dyn SearchStrategy<TestState>> = Box::new(BFS::new(SearchMode::Graph));
        let mut driver = SearchDriver::with_board(problem, strategy, board);

        assert!(driver.step());
        assert!(driver.step());
        assert!(driver.step());
        assert!(!driver.step());
        assert_eq!(driver.status(), DriverStatus::Exhausted);
        assert!(driver.summary().is_none());
        assert!(!driver.step());
    }

    #[test]
    fn exploration_is_shaded_progressively() {
        let problem = TestProblem::new(4, 3)
            .with_edge(0, 1, 1.)
            .with_edge(1, 2, 1.)
            .with_edge(2, 3, 1.);
        let strategy: Box<dyn SearchStrategy<TestState>> = Box::new(BFS::new(SearchMode::Tree));
        let mut driver = SearchDriver::with_board(problem, strategy, Board::new(1, 4));

        // the start spot is never shaded
        assert!(driver.step());
        assert_eq!(
            driver.board().colour(Coordinate::new(0, 0)),
            Some(Board::DEFAULT_COLOUR)
        );

        assert!(driver.step());
        assert!(driver.step());
        assert_eq!(
            driver.board().colour(Coordinate::new(1, 0)),
            Some(Colour::rgba(0, 0, 255, 15))
        );
        assert_eq!(
            driver.board().colour(Coordinate::new(2, 0)),
            Some(Colour::rgba(0, 0, 255, 17))
        );
    }

    #[test]
    fn solution_path_is_painted_with_directions() {
        let mut driver = mice_driver(SMALL_BOARD_TEXT, SearchStrategyName::BFS, SearchMode::Tree);
        finish(&mut driver);
        let solution = driver.solution().unwrap();
        let path = solution.path_coordinates().to_vec();
        let board = driver.board();

        let (exit, painted) = path.split_last().unwrap();
        for &coordinate in painted {
            assert_eq!(board.colour(coordinate), Some(Colour::ORANGE));
            assert!(board.direction(coordinate).is_some());
        }
        assert_eq!(board.direction(*exit), None);
        assert_eq!(board.direction(Coordinate::new(0, 0)), None);
    }

    #[test]
    fn straight_line_directions() {
        let mut driver = mice_driver(
            FORCED_WATER_BOARD_TEXT,
            SearchStrategyName::BFS,
            SearchMode::Tree,
        );
        finish(&mut driver);
        let board = driver.board();
        assert_eq!(
            board.direction(Coordinate::new(1, 0)),
            Some(PathDirection::Right)
        );
        assert_eq!(
            board.direction(Coordinate::new(2, 0)),
            Some(PathDirection::Right)
        );
        assert_eq!(board.direction(Coordinate::new(3, 0)), None);
    }

    #[test]
    fn loads_the_board_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", SMALL_BOARD_TEXT).unwrap();

        let driver = SearchDriver::new(
            MiceAndMeows::new(),
            SearchStrategyName::BFS.create(SearchMode::Tree),
            file.path(),
        )
        .unwrap();
        assert_eq!(driver.board().num_rows(), 2);
        assert_eq!(driver.board().num_cols(), 4);
        assert_eq!(driver.status(), DriverStatus::Searching);
    }

    #[test]
    fn missing_board_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let result = SearchDriver::new(
            MiceAndMeows::new(),
            SearchStrategyName::BFS.create::<MiceAndMeowsState>(SearchMode::Tree),
            &dir.path().join("missing.txt"),
        );
        assert!(matches!(result, Err(BoardError::NotFound { .. })));
    }
}
