//! Error types.

use thiserror::Error;

use crate::core::{Direction, Position};

/// Why a requested move was not applied.
///
/// Every variant is recoverable: the game state is untouched and the same
/// player may try again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("'{0}' is not a direction (expected U, D, L or R)")]
    InvalidDirection(char),
    #[error("moving {direction} from {from} leaves the board")]
    OutOfBounds { from: Position, direction: Direction },
    #[error("{at} is blocked by an obstacle")]
    Blocked { at: Position },
    #[error("the game is already over")]
    GameOver,
}

/// Failure of an external collaborator while running the game loop.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("move input ended before the game finished")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Malformed textual board layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row}: expected {expected} cells, found {found}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row}: unknown marker '{marker}'")]
    UnknownMarker { row: usize, marker: String },
}
