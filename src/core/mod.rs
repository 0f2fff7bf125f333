//! Core game engine (no_std compatible)
//!
//! Board state, move processing, the restart latch and the controller that
//! ties them together. Nothing here performs I/O; the only dependencies are
//! num-traits, rand (small_rng) and the log facade.

pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod game;
pub mod layout;
pub mod moves;
pub mod restart;
pub mod ship;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::{Board, BoardSnapshot, VisibilityGrid};
pub use common::{Cell, GameError, GuessResult, LayoutError, MoveError};
pub use config::*;
pub use game::{GameController, GameSession, GameStatus, View};
pub use layout::{FixedLayout, Grid, Layout, LayoutGenerator, OccupancyGrid, RandomFleet};
pub use moves::{apply_move, Move};
pub use restart::{Clock, RestartTrigger};
pub use ship::{Orientation, ShipType};
