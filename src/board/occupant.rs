//! Cell contents.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// What a single board cell holds.
///
/// `PlayerStart` only marks where a player began, for display. It is never
/// consulted for movement or collection and is not moved with the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    #[default]
    Empty,
    Gem,
    Obstacle,
    PlayerStart(PlayerId),
}

impl Occupant {
    /// Text marker used when rendering the board.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Occupant::Empty => "-",
            Occupant::Gem => "G",
            Occupant::Obstacle => "O",
            Occupant::PlayerStart(player) => player.marker(),
        }
    }

    /// Inverse of [`Occupant::marker`].
    #[must_use]
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "-" => Some(Occupant::Empty),
            "G" => Some(Occupant::Gem),
            "O" => Some(Occupant::Obstacle),
            "P1" => Some(Occupant::PlayerStart(PlayerId::One)),
            "P2" => Some(Occupant::PlayerStart(PlayerId::Two)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_gem(self) -> bool {
        matches!(self, Occupant::Gem)
    }

    #[must_use]
    pub const fn is_obstacle(self) -> bool {
        matches!(self, Occupant::Obstacle)
    }
}

impl std::fmt::Display for Occupant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.marker())
    }
}
