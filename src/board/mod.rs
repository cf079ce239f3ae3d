//! Board state.
//!
//! The board owns every cell and is the only place where cell contents
//! change. Player positions live on [`Player`](crate::core::Player), not in
//! the grid.

mod grid;
mod occupant;

pub use grid::Board;
pub use occupant::Occupant;
