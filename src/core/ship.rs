//! Ship definitions and footprint construction on the board grid.

use super::common::LayoutError;
use super::layout::Grid;
use super::config::BOARD_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub const fn length(&self) -> usize {
        self.length
    }

    /// Cells covered by this ship when anchored at (`row`, `col`).
    pub fn footprint(
        &self,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Grid, LayoutError> {
        let n = BOARD_SIZE as usize;
        let fits = match orientation {
            Orientation::Horizontal => row < n && col + self.length <= n,
            Orientation::Vertical => col < n && row + self.length <= n,
        };
        if !fits {
            return Err(LayoutError::ShipOutOfBounds);
        }
        let cells = (0..self.length).map(|i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        });
        Ok(Grid::from_cells(cells)?)
    }
}
