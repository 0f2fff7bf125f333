//! Visibility grid, score and turn budget for the live game.

use super::common::Cell;
use super::config::{GameConfig, BOARD_SIZE};

const N: usize = BOARD_SIZE as usize;

/// Row-major grid of what the player has uncovered.
pub type VisibilityGrid = [[Cell; N]; N];

/// Immutable copy of the board handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    pub score: u8,
    pub turns_left: u8,
    pub cells: VisibilityGrid,
}

impl BoardSnapshot {
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Count of cells in the given state.
    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == state).count()
    }
}

/// Mutable per-game board state.
///
/// Cells only move from [`Cell::Unknown`] to a resolved state; the only
/// other way they change is through [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: GameConfig,
    cells: VisibilityGrid,
    score: u8,
    turns_left: u8,
}

impl Board {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            cells: [[Cell::Unknown; N]; N],
            score: 0,
            turns_left: config.turn_budget,
        }
    }

    /// Back to a blank grid with zero score and a full turn budget.
    pub fn reset(&mut self) {
        self.cells = [[Cell::Unknown; N]; N];
        self.score = 0;
        self.turns_left = self.config.turn_budget;
    }

    pub fn is_won(&self) -> bool {
        self.score >= self.config.win_threshold
    }

    pub fn is_lost(&self) -> bool {
        self.turns_left == 0
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn turns_left(&self) -> u8 {
        self.turns_left
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// State of one cell, `None` when off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            score: self.score,
            turns_left: self.turns_left,
            cells: self.cells,
        }
    }

    /// Reveal a ship cell. Caller guarantees the cell is in range and unknown.
    pub(crate) fn mark_hit(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Cell::Hit;
        self.score = self.score.saturating_add(1);
    }

    /// Reveal an empty cell. Caller guarantees the cell is in range and unknown.
    pub(crate) fn mark_miss(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Cell::Miss;
        self.turns_left = self.turns_left.saturating_sub(1);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
