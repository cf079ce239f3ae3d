//! Fixed rules of the game and win determination.
//!
//! The rules are not configurable: every game is played on the same board
//! size with the same generation odds and turn limit.

pub mod result;

pub use result::GameResult;

use crate::core::Position;

/// Width and height of the square board.
pub const BOARD_SIZE: usize = 6;

/// Chance that any single cell receives a gem during generation.
pub const GEM_PROBABILITY: f64 = 0.2;

/// Number of obstacle draws during generation. Draws may repeat a cell.
pub const OBSTACLE_DRAWS: usize = 6;

/// Valid moves, across both players, after which the game ends.
pub const TURN_LIMIT: u32 = 30;

/// Where Player 1 starts.
pub const PLAYER_ONE_START: Position = Position::new(0, 0);

/// Where Player 2 starts.
pub const PLAYER_TWO_START: Position = Position::new(BOARD_SIZE as i32 - 1, BOARD_SIZE as i32 - 1);
