//! Applies one guessed coordinate to the board.

use super::board::Board;
use super::common::{GuessResult, MoveError};
use super::config::BOARD_SIZE;
use super::layout::OccupancyGrid;

/// A guessed coordinate as delivered by the input transport.
///
/// Components are signed so that negative input reaches the range check
/// instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Board indices, if both components are on the board.
    pub fn cell(&self) -> Option<(usize, usize)> {
        let n = BOARD_SIZE as i32;
        if (0..n).contains(&self.row) && (0..n).contains(&self.col) {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }
}

/// Apply `mv` against `ships`, updating `board`.
///
/// A hit increments the score and a miss spends one turn. On `Err` the
/// board is left untouched. Terminal conditions are not checked here.
pub fn apply_move(
    board: &mut Board,
    ships: &OccupancyGrid,
    mv: Move,
) -> Result<GuessResult, MoveError> {
    let (row, col) = mv.cell().ok_or(MoveError::OutOfRange {
        row: mv.row,
        col: mv.col,
    })?;
    if board.cell(row, col).is_some_and(|c| c.is_resolved()) {
        return Err(MoveError::AlreadyResolved { row, col });
    }
    if ships.is_occupied(row, col) {
        board.mark_hit(row, col);
        Ok(GuessResult::Hit)
    } else {
        board.mark_miss(row, col);
        Ok(GuessResult::Miss)
    }
}
