use crate::search::{Board, BoardError, HeuristicName, SearchState};
use std::{fmt::Debug, fs, io, path::Path};

/// A search problem defined on a board. The problem owns the static parts of
/// the board (terrain, exit, ...) while everything that changes as the agent
/// moves lives in its [`SearchState`]s.
pub trait SearchProblem: Debug {
    type State: SearchState;

    /// Select the distance estimate used for every state created from now
    /// on.
    fn set_heuristic(&mut self, heuristic: HeuristicName);

    /// Select the distance estimate by name. Names the problem does not know
    /// select [`HeuristicName::None`] rather than failing.
    fn set_heuristic_by_name(&mut self, name: &str) {
        self.set_heuristic(HeuristicName::from_name(name));
    }

    /// The start state, with its estimate computed under the currently
    /// selected heuristic.
    fn start_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// All states reachable from `state` with a single transition.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;

    /// Replace the problem instance with the one described by `text`, one
    /// character per spot and one line per row. Returns the board to display
    /// for it.
    fn load_board_text(&mut self, text: &str) -> Result<Board, BoardError>;

    /// Like [`SearchProblem::load_board_text`], but reading the description
    /// from a file.
    fn load_board_file(&mut self, path: &Path) -> Result<Board, BoardError> {
        let text = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => BoardError::NotFound {
                path: path.to_path_buf(),
                source,
            },
            _ => BoardError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        self.load_board_text(&text)
    }
}
