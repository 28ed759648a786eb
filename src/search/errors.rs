use crate::search::Coordinate;
use std::{io, path::PathBuf};

/// Reasons a board description can not be turned into a problem instance.
#[derive(thiserror::Error, Debug)]
pub enum BoardError {
    #[error("board file {path:?} not found")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read board file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("board has no rows")]
    Empty,

    #[error("row {row} has {found} spots, expected {expected} like the first row")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognised spot {cell:?} at ({x}, {y})")]
    UnrecognisedCell { cell: char, x: usize, y: usize },

    #[error("board has no start spot")]
    MissingStart,

    #[error("board has no exit spot")]
    MissingExit,

    #[error("board has a second start spot at {second}, the first is at {first}")]
    DuplicateStart {
        first: Coordinate,
        second: Coordinate,
    },

    #[error("board has a second exit spot at {second}, the first is at {first}")]
    DuplicateExit {
        first: Coordinate,
        second: Coordinate,
    },
}
