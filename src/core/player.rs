//! Player identity and per-player game data.
//!
//! ## PlayerId
//!
//! Exactly two seats: `One` moves first and starts in the top-left corner,
//! `Two` starts in the bottom-right corner.
//!
//! ## Player
//!
//! Owns its position and gem count. The position is authoritative; start
//! markers on the board are cosmetic.

use serde::{Deserialize, Serialize};

use super::position::{Direction, Position};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Both players in turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Returns the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 0-based index, for per-player arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// Short marker used on the board and in prompts (`P1`, `P2`).
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            PlayerId::One => "P1",
            PlayerId::Two => "P2",
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// A participant: name, token position, gems collected so far.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    position: Position,
    gem_count: u32,
}

impl Player {
    /// Create a player at `position` with no gems, named after its marker.
    #[must_use]
    pub fn new(id: PlayerId, position: Position) -> Self {
        Self {
            id,
            name: id.marker().to_string(),
            position,
            gem_count: 0,
        }
    }

    /// Which seat this player occupies.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Display name (`P1` or `P2`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current token position.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Gems collected so far.
    #[must_use]
    pub fn gem_count(&self) -> u32 {
        self.gem_count
    }

    /// Step one cell in `direction`.
    ///
    /// No bounds checking: only call this after the board accepted the move.
    pub fn move_by(&mut self, direction: Direction) {
        self.position.advance(direction);
    }

    pub(crate) fn add_gem(&mut self) {
        self.gem_count += 1;
    }
}
