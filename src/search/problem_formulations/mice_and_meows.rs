//! Of mice and meows: the agent, a cat, has to catch every mouse on the board
//! and then make it to the exit. Mice are caught by walking onto their spot.
//! Every move costs 1, except moving into water which costs 6.
//!
//! Boards are given as text, one character per spot:
//!
//! | Character | Spot |
//! |---|---|
//! | `s` | start position of the agent (exactly one) |
//! | `e` | exit (exactly one) |
//! | `w` | water, passable at a higher cost |
//! | `m` | a mouse (any number) |
//! | space | open ground |

use crate::search::{
    heuristics::grid_distance, Board, BoardError, Colour, Coordinate, HeuristicName,
    HeuristicValue, SearchProblem, SearchState,
};
use std::{
    collections::BTreeSet,
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
};
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};
use tracing::{debug, info};

const OPEN_COST: f64 = 1.;
const WATER_COST: f64 = 6.;

/// The moves available to the agent, in the order successors are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Move {
    Left,
    Up,
    Right,
    Down,
}

impl Move {
    fn apply(&self, coordinate: &Coordinate) -> Coordinate {
        match self {
            Move::Left => coordinate.offset(-1, 0),
            Move::Up => coordinate.offset(0, -1),
            Move::Right => coordinate.offset(1, 0),
            Move::Down => coordinate.offset(0, 1),
        }
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Spot {
    Open,
    Start,
    Exit,
    Water,
    Mouse,
}

impl Spot {
    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ' ' => Some(Spot::Open),
            's' => Some(Spot::Start),
            'e' => Some(Spot::Exit),
            'w' => Some(Spot::Water),
            'm' => Some(Spot::Mouse),
            _ => None,
        }
    }

    fn symbol(&self) -> char {
        match self {
            Spot::Open => ' ',
            Spot::Start => 's',
            Spot::Exit => 'e',
            Spot::Water => 'w',
            Spot::Mouse => 'm',
        }
    }

    fn colour(&self) -> Colour {
        match self {
            Spot::Open => Colour::WHITE,
            Spot::Start => Colour::GREEN,
            Spot::Exit => Colour::RED,
            Spot::Water => Colour::BLACK,
            Spot::Mouse => Colour::GREY,
        }
    }

    fn cost(&self) -> f64 {
        match self {
            Spot::Water => WATER_COST,
            _ => OPEN_COST,
        }
    }
}

/// A state is the position of the agent together with the mice that have not
/// been caught yet. The action, cost and distance estimate only describe how
/// the state was reached and are ignored when comparing states.
#[derive(Debug, Clone)]
pub struct MiceAndMeowsState {
    agent: Coordinate,
    mice: BTreeSet<Coordinate>,
    action: Option<Move>,
    cost: f64,
    distance: HeuristicValue,
}

impl MiceAndMeowsState {
    pub fn mice(&self) -> &BTreeSet<Coordinate> {
        &self.mice
    }

    pub fn last_move(&self) -> Option<Move> {
        self.action
    }
}

impl PartialEq for MiceAndMeowsState {
    fn eq(&self, other: &Self) -> bool {
        self.agent == other.agent && self.mice == other.mice
    }
}

impl Eq for MiceAndMeowsState {}

impl Hash for MiceAndMeowsState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.agent.hash(state);
        self.mice.hash(state);
    }
}

impl SearchState for MiceAndMeowsState {
    fn agent_coordinate(&self) -> Coordinate {
        self.agent
    }

    fn cost(&self) -> f64 {
        self.cost
    }

    fn distance(&self) -> HeuristicValue {
        self.distance
    }

    fn action(&self) -> &str {
        self.action.map_or("", |action| action.name())
    }
}

/// The fixed part of a problem instance, as parsed from a board description.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    spots: Vec<Vec<Spot>>,
    start: Coordinate,
    exit: Coordinate,
    mice: BTreeSet<Coordinate>,
}

impl Layout {
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let mut spots = vec![];
        let mut start = None;
        let mut exit = None;
        let mut mice = BTreeSet::new();

        for (y, line) in text.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut row = Vec::with_capacity(line.len());
            for (x, symbol) in line.chars().enumerate() {
                let spot = Spot::from_symbol(symbol)
                    .ok_or(BoardError::UnrecognisedCell { cell: symbol, x, y })?;
                let coordinate = Coordinate::new(x as i32, y as i32);
                match spot {
                    Spot::Start => {
                        if let Some(first) = start {
                            return Err(BoardError::DuplicateStart {
                                first,
                                second: coordinate,
                            });
                        }
                        start = Some(coordinate);
                    }
                    Spot::Exit => {
                        if let Some(first) = exit {
                            return Err(BoardError::DuplicateExit {
                                first,
                                second: coordinate,
                            });
                        }
                        exit = Some(coordinate);
                    }
                    Spot::Mouse => {
                        mice.insert(coordinate);
                    }
                    Spot::Open | Spot::Water => {}
                }
                row.push(spot);
            }
            spots.push(row);
        }
        // editors like to end files with blank lines
        while spots.last().is_some_and(Vec::is_empty) {
            spots.pop();
        }

        let num_cols = spots.first().map(Vec::len).ok_or(BoardError::Empty)?;
        if num_cols == 0 {
            return Err(BoardError::Empty);
        }
        if let Some((row, found)) = spots
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != num_cols)
        {
            return Err(BoardError::RaggedRow {
                row,
                expected: num_cols,
                found,
            });
        }

        Ok(Self {
            spots,
            start: start.ok_or(BoardError::MissingStart)?,
            exit: exit.ok_or(BoardError::MissingExit)?,
            mice,
        })
    }

    pub fn num_rows(&self) -> usize {
        self.spots.len()
    }

    pub fn num_cols(&self) -> usize {
        self.spots.first().map_or(0, Vec::len)
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn exit(&self) -> Coordinate {
        self.exit
    }

    pub fn mice(&self) -> &BTreeSet<Coordinate> {
        &self.mice
    }

    fn spot(&self, coordinate: &Coordinate) -> Option<Spot> {
        let row = usize::try_from(coordinate.y).ok()?;
        let col = usize::try_from(coordinate.x).ok()?;
        // bounds come from the first row, all rows have its length
        if col >= self.num_cols() {
            return None;
        }
        self.spots.get(row).map(|spots| spots[col])
    }

    /// The board to display for this layout, each spot coloured by its kind.
    pub fn board(&self) -> Board {
        let mut board = Board::new(self.num_rows(), self.num_cols());
        for (y, row) in self.spots.iter().enumerate() {
            for (x, spot) in row.iter().enumerate() {
                board.set_colour(Coordinate::new(x as i32, y as i32), spot.colour());
            }
        }
        board
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.spots {
            let line: String = row
                .iter()
                .map(|spot| match spot {
                    Spot::Open => '_',
                    _ => spot.symbol(),
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// The mice and meows problem. A freshly created problem has an empty board,
/// load one with [`SearchProblem::load_board_text`] or
/// [`SearchProblem::load_board_file`] before searching.
#[derive(Debug, Default)]
pub struct MiceAndMeows {
    layout: Layout,
    heuristic: HeuristicName,
}

impl MiceAndMeows {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Result<(Self, Board), BoardError> {
        let mut problem = Self::new();
        let board = problem.load_board_text(text)?;
        Ok((problem, board))
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn heuristic(&self) -> HeuristicName {
        self.heuristic
    }

    fn distance(&self, agent: &Coordinate, mice: &BTreeSet<Coordinate>) -> HeuristicValue {
        grid_distance::evaluate(self.heuristic, agent, mice, &self.layout.exit)
    }
}

impl SearchProblem for MiceAndMeows {
    type State = MiceAndMeowsState;

    fn set_heuristic(&mut self, heuristic: HeuristicName) {
        info!(heuristic = heuristic.name(), "selected heuristic");
        self.heuristic = heuristic;
    }

    fn start_state(&self) -> MiceAndMeowsState {
        let start = self.layout.start;
        let mice = self.layout.mice.clone();
        MiceAndMeowsState {
            agent: start,
            distance: self.distance(&start, &mice),
            mice,
            action: None,
            cost: 0.,
        }
    }

    fn is_goal(&self, state: &MiceAndMeowsState) -> bool {
        state.mice.is_empty() && state.agent == self.layout.exit
    }

    fn successors(&self, state: &MiceAndMeowsState) -> Vec<MiceAndMeowsState> {
        Move::iter()
            .filter_map(|action| {
                let agent = action.apply(&state.agent);
                let spot = self.layout.spot(&agent)?;

                let mut mice = state.mice.clone();
                mice.remove(&agent);

                Some(MiceAndMeowsState {
                    agent,
                    distance: self.distance(&agent, &mice),
                    mice,
                    action: Some(action),
                    cost: spot.cost(),
                })
            })
            .collect()
    }

    fn load_board_text(&mut self, text: &str) -> Result<Board, BoardError> {
        let layout = Layout::parse(text)?;
        info!(
            rows = layout.num_rows(),
            cols = layout.num_cols(),
            mice = layout.mice().len(),
            "loaded board"
        );
        debug!("starting board:\n{}", layout);
        let board = layout.board();
        self.layout = layout;
        Ok(board)
    }
}
