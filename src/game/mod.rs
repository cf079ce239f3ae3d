//! The game loop and its external collaborators.
//!
//! [`Game`] owns the board and both players and enforces turn order.
//! Input and display are injected through the traits in [`io`], so a game
//! can be driven by a terminal, a script or a test.

mod engine;
pub mod io;

pub use engine::{Game, TurnOutcome, TurnState};
pub use io::{GameOutput, LineInput, MoveInput, ScriptedInput, WriterOutput};
