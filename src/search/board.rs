//! The board is the read-only view a renderer gets of a search: a grid of
//! display colours and a parallel grid of solution path directions.

use crate::search::Coordinate;
use strum_macros::{EnumIter, IntoStaticStr};

/// An RGBA colour, alpha 255 is fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const WHITE: Colour = Colour::rgb(255, 255, 255);
    pub const BLACK: Colour = Colour::rgb(0, 0, 0);
    pub const GREEN: Colour = Colour::rgb(0, 255, 0);
    pub const RED: Colour = Colour::rgb(255, 0, 0);
    pub const ORANGE: Colour = Colour::rgb(255, 200, 0);
    pub const GREY: Colour = Colour::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Composite this colour over an opaque background.
    pub fn over(&self, background: Colour) -> Colour {
        let blend = |fg: u8, bg: u8| -> u8 {
            let alpha = u32::from(self.a);
            ((u32::from(fg) * alpha + u32::from(bg) * (255 - alpha)) / 255) as u8
        };
        Colour::rgb(
            blend(self.r, background.r),
            blend(self.g, background.g),
            blend(self.b, background.b),
        )
    }
}

/// How the solution path passes through a spot. Straight segments are named
/// by their direction of travel, turns by the direction the path enters with
/// followed by the direction it leaves with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum PathDirection {
    #[strum(serialize = "u")]
    Up,
    #[strum(serialize = "d")]
    Down,
    #[strum(serialize = "l")]
    Left,
    #[strum(serialize = "r")]
    Right,
    #[strum(serialize = "dr")]
    DownRight,
    #[strum(serialize = "dl")]
    DownLeft,
    #[strum(serialize = "ur")]
    UpRight,
    #[strum(serialize = "ul")]
    UpLeft,
    #[strum(serialize = "lu")]
    LeftUp,
    #[strum(serialize = "ld")]
    LeftDown,
    #[strum(serialize = "ru")]
    RightUp,
    #[strum(serialize = "rd")]
    RightDown,
}

impl PathDirection {
    /// Work out how the path runs through `current`, given the spot it came
    /// from and the spot it goes to next. All three spots are expected to be
    /// consecutive steps of a four-connected path.
    pub fn from_steps(previous: Coordinate, current: Coordinate, next: Coordinate) -> Self {
        if previous.x == next.x {
            if previous.y < next.y {
                PathDirection::Down
            } else {
                PathDirection::Up
            }
        } else if previous.y == next.y {
            if previous.x < next.x {
                PathDirection::Right
            } else {
                PathDirection::Left
            }
        } else if next.x > current.x && previous.y < current.y {
            PathDirection::DownRight
        } else if previous.x > current.x && next.y < current.y {
            PathDirection::LeftUp
        } else if previous.x < current.x && next.y < current.y {
            PathDirection::RightUp
        } else if next.x < current.x && previous.y < current.y {
            PathDirection::DownLeft
        } else if next.x < current.x && previous.y > current.y {
            PathDirection::UpLeft
        } else if previous.x < current.x && next.y > current.y {
            PathDirection::RightDown
        } else if previous.x > current.x && next.y > current.y {
            PathDirection::LeftDown
        } else {
            PathDirection::UpRight
        }
    }

    pub fn code(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    num_rows: usize,
    num_cols: usize,
    colours: Vec<Vec<Colour>>,
    directions: Vec<Vec<Option<PathDirection>>>,
}

impl Board {
    pub const DEFAULT_COLOUR: Colour = Colour::WHITE;

    /// Create a board where every spot has the default colour and no
    /// direction.
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            colours: vec![vec![Self::DEFAULT_COLOUR; num_cols]; num_rows],
            directions: vec![vec![None; num_cols]; num_rows],
        }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Whether `coordinate` lies on the board.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.index(coordinate).is_some()
    }

    pub fn colour(&self, coordinate: Coordinate) -> Option<Colour> {
        self.index(coordinate).map(|(row, col)| self.colours[row][col])
    }

    pub fn direction(&self, coordinate: Coordinate) -> Option<PathDirection> {
        self.index(coordinate)
            .and_then(|(row, col)| self.directions[row][col])
    }

    /// Set the colour of a spot, coordinates off the board are ignored.
    pub fn set_colour(&mut self, coordinate: Coordinate, colour: Colour) {
        if let Some((row, col)) = self.index(coordinate) {
            self.colours[row][col] = colour;
        }
    }

    /// Set the path direction of a spot, coordinates off the board are
    /// ignored.
    pub fn set_direction(&mut self, coordinate: Coordinate, direction: PathDirection) {
        if let Some((row, col)) = self.index(coordinate) {
            self.directions[row][col] = Some(direction);
        }
    }

    fn index(&self, coordinate: Coordinate) -> Option<(usize, usize)> {
        let row = usize::try_from(coordinate.y).ok()?;
        let col = usize::try_from(coordinate.x).ok()?;
        (row < self.num_rows && col < self.num_cols).then_some((row, col))
    }
}
