//! Grid coordinates and movement directions.
//!
//! ## Coordinate convention
//!
//! `x` is the column and `y` is the row, both 0-based from the top-left
//! corner. Grids are always indexed as `grid[y][x]`.
//!
//! Coordinates are signed so that a step off the board (to `-1`) can be
//! represented and then rejected by validation.

use serde::{Deserialize, Serialize};

use crate::error::MoveError;

/// A cell coordinate on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one step away in `direction`. Does not check bounds.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move this position one step in place.
    pub fn advance(&mut self, direction: Direction) {
        *self = self.step(direction);
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four cardinal moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the last row.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the last column.
    Right,
}

impl Direction {
    /// All directions, in `U D L R` order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit delta as `(dx, dy)`.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Input letter for this direction.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

/// Parses `U`, `D`, `L`, `R` in either case.
impl TryFrom<char> for Direction {
    type Error = MoveError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'U' => Ok(Direction::Up),
            'D' => Ok(Direction::Down),
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            _ => Err(MoveError::InvalidDirection(c)),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_deltas() {
        let origin = Position::new(2, 2);

        assert_eq!(origin.step(Direction::Up), Position::new(2, 1));
        assert_eq!(origin.step(Direction::Down), Position::new(2, 3));
        assert_eq!(origin.step(Direction::Left), Position::new(1, 2));
        assert_eq!(origin.step(Direction::Right), Position::new(3, 2));
    }

    #[test]
    fn test_step_can_leave_board() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Direction::Up), Position::new(0, -1));
        assert_eq!(corner.step(Direction::Left), Position::new(-1, 0));
    }

    #[test]
    fn test_advance_mutates_in_place() {
        let mut pos = Position::new(4, 4);
        pos.advance(Direction::Right);
        pos.advance(Direction::Up);
        assert_eq!(pos, Position::new(5, 3));
    }

    #[test]
    fn test_parse_case_insensitive() {
        for (c, expected) in [
            ('U', Direction::Up),
            ('u', Direction::Up),
            ('D', Direction::Down),
            ('d', Direction::Down),
            ('L', Direction::Left),
            ('l', Direction::Left),
            ('R', Direction::Right),
            ('r', Direction::Right),
        ] {
            assert_eq!(Direction::try_from(c), Ok(expected));
        }
    }

    #[test]
    fn test_parse_rejects_other_chars() {
        for c in ['x', 'W', '1', ' ', '?'] {
            assert_eq!(Direction::try_from(c), Err(MoveError::InvalidDirection(c)));
        }
    }

    #[test]
    fn test_letter_round_trips_through_parse() {
        for dir in Direction::ALL {
            assert_eq!(Direction::try_from(dir.letter()), Ok(dir));
        }
    }

    #[test]
    fn test_position_serde() {
        let pos = Position::new(3, 5);
        let json = serde_json::to_string(&pos).unwrap();
        assert_eq!(json, r#"{"x":3,"y":5}"#);
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pos);
    }
}
