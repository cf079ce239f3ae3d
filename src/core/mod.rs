//! Core types: positions, directions, players, RNG.
//!
//! These are the building blocks the board and the game loop are made of.

pub mod player;
pub mod position;
pub mod rng;

pub use player::{Player, PlayerId};
pub use position::{Direction, Position};
pub use rng::GameRng;
