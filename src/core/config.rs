use super::common::GameError;
use super::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;

/// Distinct hits needed to win a game.
pub const WIN_THRESHOLD: u8 = 3;

/// Misses allowed before the game is lost.
pub const TURN_BUDGET: u8 = 30;

/// Minimum spacing between two accepted button edges, in microseconds.
pub const DEBOUNCE_QUIET_US: u32 = 4_000;

pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < NUM_SHIPS {
        total += SHIPS[i].length();
        i += 1;
    }
    total
};

/// Per-game rules that may be tuned at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub win_threshold: u8,
    pub turn_budget: u8,
}

impl GameConfig {
    pub const fn new(win_threshold: u8, turn_budget: u8) -> Self {
        Self {
            win_threshold,
            turn_budget,
        }
    }

    /// Reject rules under which a game would start already finished.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.win_threshold == 0 {
            return Err(GameError::InvalidConfig("win threshold must be at least 1"));
        }
        if self.turn_budget == 0 {
            return Err(GameError::InvalidConfig("turn budget must be at least 1"));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(WIN_THRESHOLD, TURN_BUDGET)
    }
}
