//! Shared game types: cell states, move outcomes and error enums.

use super::bitboard::BitBoardError;
use core::fmt;

/// What the player knows about one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Unknown,
    Miss,
    Hit,
}

impl Cell {
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Cell::Unknown)
    }

    /// Single-character glyph used by the HTML table and the terminal view.
    pub const fn glyph(self) -> char {
        match self {
            Cell::Unknown => '?',
            Cell::Miss => ' ',
            Cell::Hit => 'X',
        }
    }
}

/// Result of a move that changed the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    Hit,
    Miss,
}

/// Reasons a move left the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Row or column outside `[0, BOARD_SIZE)`.
    OutOfRange { row: i32, col: i32 },
    /// Cell was already revealed as a hit or a miss.
    AlreadyResolved { row: usize, col: usize },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange { row, col } => {
                write!(f, "coordinate ({}, {}) is off the board", row, col)
            }
            MoveError::AlreadyResolved { row, col } => {
                write!(f, "cell ({}, {}) was already guessed", row, col)
            }
        }
    }
}

/// Errors raised while producing a ship layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    BitBoardError(BitBoardError),
    /// Ship does not fit on the board at the requested origin.
    ShipOutOfBounds,
    /// Random placement gave up after too many overlapping attempts.
    UnableToPlaceShip(&'static str),
    /// Generator produced a grid without any ship cell.
    EmptyLayout,
}

impl From<BitBoardError> for LayoutError {
    fn from(err: BitBoardError) -> Self {
        LayoutError::BitBoardError(err)
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            LayoutError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            LayoutError::UnableToPlaceShip(name) => write!(f, "Unable to place ship {}", name),
            LayoutError::EmptyLayout => write!(f, "Layout has no ship cells"),
        }
    }
}

/// Errors surfaced by the game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Ship layout could not be generated; the game cannot start.
    Layout(LayoutError),
    InvalidConfig(&'static str),
}

impl From<LayoutError> for GameError {
    fn from(err: LayoutError) -> Self {
        GameError::Layout(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Layout(e) => write!(f, "layout generation failed: {}", e),
            GameError::InvalidConfig(msg) => write!(f, "invalid game config: {}", msg),
        }
    }
}
