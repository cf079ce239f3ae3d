//! # gem-duel
//!
//! A two-player gem collecting game on a fixed 6x6 board.
//!
//! Players take turns stepping their token up, down, left or right. Landing
//! on a gem collects it; obstacles and the board edge block movement. After
//! 30 valid moves in total, the player holding more gems wins.
//!
//! ## Design
//!
//! - **Deterministic**: boards are generated from an explicit seeded
//!   [`GameRng`], so a seed reproduces a layout exactly.
//! - **One coordinate convention**: the grid is always `grid[y][x]`.
//! - **Injected I/O**: the game loop reads moves through [`MoveInput`] and
//!   writes text through [`GameOutput`]; nothing in the library touches the
//!   console.
//!
//! ```
//! use gem_duel::{Board, Game, GameResult, ScriptedInput};
//!
//! // No gems anywhere: both players pace back and forth to a tie.
//! let mut game = Game::with_board(Board::empty());
//! let mut input = ScriptedInput::from("RULD".repeat(8).as_str());
//! let mut transcript: Vec<String> = Vec::new();
//!
//! let result = game.run(&mut input, &mut transcript).unwrap();
//! assert_eq!(result, GameResult::Tie);
//! assert_eq!(transcript.last().unwrap(), "It's a tie!");
//! ```
//!
//! ## Modules
//!
//! - `core`: positions, directions, players, RNG
//! - `board`: cell contents, layout generation, move validation, gem pickup
//! - `rules`: fixed constants and win determination
//! - `game`: turn sequencing and the I/O collaborators
//! - `cli`: options for the console binary

pub mod board;
pub mod cli;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;

pub use crate::board::{Board, Occupant};
pub use crate::core::{Direction, GameRng, Player, PlayerId, Position};
pub use crate::error::{GameError, LayoutError, MoveError};
pub use crate::game::{
    Game, GameOutput, LineInput, MoveInput, ScriptedInput, TurnOutcome, TurnState, WriterOutput,
};
pub use crate::rules::GameResult;
