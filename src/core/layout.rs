//! Ship layouts: the per-game occupancy grid and the generators that
//! produce it.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::bitboard::BitBoard;
use super::common::LayoutError;
use super::config::{BOARD_SIZE, SHIPS};
use super::ship::{Orientation, ShipType};

/// Bit grid sized for the game board.
pub type Grid = BitBoard<u128, { BOARD_SIZE as usize }>;

const PLACEMENT_ATTEMPTS: usize = 100;

/// Which cells hold a ship. Fixed for the lifetime of one game.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct OccupancyGrid {
    cells: Grid,
}

impl OccupancyGrid {
    pub fn new(cells: Grid) -> Self {
        Self { cells }
    }

    /// Grid with every listed `(row, col)` occupied.
    pub fn from_cells<I>(cells: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Ok(Self::new(Grid::from_cells(cells)?))
    }

    /// `false` for anything outside the board.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells.get(row, col).unwrap_or(false)
    }

    /// Number of occupied cells.
    pub fn ship_cells(&self) -> usize {
        self.cells.count_ones()
    }

    pub fn cells(&self) -> Grid {
        self.cells
    }
}

impl core::fmt::Debug for OccupancyGrid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.cells, f)
    }
}

/// A generated layout: the occupancy grid and how many ships it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub grid: OccupancyGrid,
    pub ship_count: usize,
}

/// Source of ship layouts, asked once at startup and once per restart.
pub trait LayoutGenerator {
    fn generate(&mut self) -> Result<Layout, LayoutError>;
}

/// Places a fleet at random, non-overlapping positions.
pub struct RandomFleet {
    rng: SmallRng,
    fleet: &'static [ShipType],
}

impl RandomFleet {
    /// Standard fleet with a fixed seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self::with_fleet(SmallRng::seed_from_u64(seed), &SHIPS)
    }

    /// Standard fleet seeded from the thread RNG.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let mut seed_rng = rand::rng();
        Self::with_fleet(SmallRng::from_rng(&mut seed_rng), &SHIPS)
    }

    pub fn with_fleet(rng: SmallRng, fleet: &'static [ShipType]) -> Self {
        Self { rng, fleet }
    }

    /// Random footprint for `ship` that does not touch `taken`.
    fn random_footprint(&mut self, ship: ShipType, taken: Grid) -> Result<Grid, LayoutError> {
        let n = BOARD_SIZE as usize;
        if ship.length() == 0 || ship.length() > n {
            return Err(LayoutError::ShipOutOfBounds);
        }
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orient = if self.rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orient {
                Orientation::Horizontal => (n - 1, n - ship.length()),
                Orientation::Vertical => (n - ship.length(), n - 1),
            };
            let r = self.rng.random_range(0..=max_r);
            let c = self.rng.random_range(0..=max_c);
            let mask = ship.footprint(orient, r, c)?;
            if (taken & mask).is_empty() {
                return Ok(mask);
            }
        }
        Err(LayoutError::UnableToPlaceShip(ship.name()))
    }
}

impl LayoutGenerator for RandomFleet {
    fn generate(&mut self) -> Result<Layout, LayoutError> {
        let mut taken = Grid::new();
        for &ship in self.fleet {
            taken |= self.random_footprint(ship, taken)?;
        }
        if taken.is_empty() {
            return Err(LayoutError::EmptyLayout);
        }
        Ok(Layout {
            grid: OccupancyGrid::new(taken),
            ship_count: self.fleet.len(),
        })
    }
}

/// Hands out the same layout every game.
#[derive(Debug, Clone, Copy)]
pub struct FixedLayout {
    layout: Layout,
}

impl FixedLayout {
    pub fn new(grid: OccupancyGrid, ship_count: usize) -> Self {
        Self {
            layout: Layout { grid, ship_count },
        }
    }
}

impl LayoutGenerator for FixedLayout {
    fn generate(&mut self) -> Result<Layout, LayoutError> {
        Ok(self.layout)
    }
}
