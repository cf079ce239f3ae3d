//! Outcome of a finished game.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly more gems than the opponent.
    Winner(PlayerId),
    /// Equal gem counts.
    Tie,
}

impl GameResult {
    /// Compare final gem counts. Strictly greater wins; equal is a tie.
    #[must_use]
    pub fn from_gem_counts(player_one: u32, player_two: u32) -> Self {
        match player_one.cmp(&player_two) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::One),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::Two),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }
}

/// The verdict line shown at the end of a game.
impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(player) => write!(f, "{player} wins!"),
            GameResult::Tie => write!(f, "It's a tie!"),
        }
    }
}
