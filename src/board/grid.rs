//! The 6x6 board: layout generation, move validation, gem pickup.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::occupant::Occupant;
use crate::core::{Direction, GameRng, Player, PlayerId, Position};
use crate::error::{LayoutError, MoveError};
use crate::rules::{BOARD_SIZE, GEM_PROBABILITY, OBSTACLE_DRAWS, PLAYER_ONE_START, PLAYER_TWO_START};

/// Grid of cells, stored row-major: `grid[y][x]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: [[Occupant; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board with every cell empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Generate a random starting layout.
    ///
    /// 1. Start markers at both players' start cells.
    /// 2. Each cell, row by row, becomes a gem with probability
    ///    [`GEM_PROBABILITY`], overwriting any start marker.
    /// 3. [`OBSTACLE_DRAWS`] uniform `(x, y)` draws each become an obstacle,
    ///    overwriting whatever is there. Repeated draws hit the same cell, so
    ///    a board can end up with fewer obstacles than draws.
    pub fn generate(rng: &mut GameRng) -> Self {
        let mut board = Self::empty();

        board.set(PLAYER_ONE_START, Occupant::PlayerStart(PlayerId::One));
        board.set(PLAYER_TWO_START, Occupant::PlayerStart(PlayerId::Two));

        for row in board.grid.iter_mut() {
            for cell in row.iter_mut() {
                if rng.gen_bool(GEM_PROBABILITY) {
                    *cell = Occupant::Gem;
                }
            }
        }

        for _ in 0..OBSTACLE_DRAWS {
            let x = rng.gen_range_usize(0..BOARD_SIZE);
            let y = rng.gen_range_usize(0..BOARD_SIZE);
            board.grid[y][x] = Occupant::Obstacle;
        }

        debug!(
            seed = rng.seed(),
            gems = board.gem_count(),
            obstacles = board.obstacle_count(),
            "generated board"
        );

        board
    }

    /// Build a board from six rows of six space-separated markers.
    ///
    /// ```
    /// use gem_duel::board::{Board, Occupant};
    /// use gem_duel::core::Position;
    ///
    /// let board = Board::from_rows(&[
    ///     "P1 - - - - -",
    ///     "-  G - - - -",
    ///     "-  - O - - -",
    ///     "-  - - - - -",
    ///     "-  - - - - -",
    ///     "-  - - - - P2",
    /// ])
    /// .unwrap();
    /// assert_eq!(board.occupant(Position::new(1, 1)), Some(Occupant::Gem));
    /// assert_eq!(board.occupant(Position::new(2, 2)), Some(Occupant::Obstacle));
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, LayoutError> {
        if rows.len() != BOARD_SIZE {
            return Err(LayoutError::RowCount {
                expected: BOARD_SIZE,
                found: rows.len(),
            });
        }

        let mut board = Self::empty();
        for (y, line) in rows.iter().enumerate() {
            let markers: Vec<&str> = line.as_ref().split_whitespace().collect();
            if markers.len() != BOARD_SIZE {
                return Err(LayoutError::ColumnCount {
                    row: y,
                    expected: BOARD_SIZE,
                    found: markers.len(),
                });
            }
            for (x, marker) in markers.into_iter().enumerate() {
                board.grid[y][x] =
                    Occupant::from_marker(marker).ok_or_else(|| LayoutError::UnknownMarker {
                        row: y,
                        marker: marker.to_string(),
                    })?;
            }
        }

        Ok(board)
    }

    /// Whether `pos` lies on the board.
    #[must_use]
    pub fn in_bounds(pos: Position) -> bool {
        Self::index(pos).is_some()
    }

    /// Grid index `(row, col)` for an on-board position.
    fn index(pos: Position) -> Option<(usize, usize)> {
        let row = usize::try_from(pos.y).ok().filter(|&y| y < BOARD_SIZE)?;
        let col = usize::try_from(pos.x).ok().filter(|&x| x < BOARD_SIZE)?;
        Some((row, col))
    }

    /// What is at `pos`, or `None` when off the board.
    #[must_use]
    pub fn occupant(&self, pos: Position) -> Option<Occupant> {
        Self::index(pos).map(|(row, col)| self.grid[row][col])
    }

    fn set(&mut self, pos: Position, occupant: Occupant) {
        if let Some((row, col)) = Self::index(pos) {
            self.grid[row][col] = occupant;
        }
    }

    /// Validate a move and return the destination.
    ///
    /// Does not modify the board or the player.
    pub fn check_move(&self, player: &Player, direction: Direction) -> Result<Position, MoveError> {
        let from = player.position();
        let to = from.step(direction);

        match self.occupant(to) {
            None => Err(MoveError::OutOfBounds { from, direction }),
            Some(Occupant::Obstacle) => Err(MoveError::Blocked { at: to }),
            Some(_) => Ok(to),
        }
    }

    /// Whether `player` may step in `direction`: the destination is on the
    /// board and is not an obstacle.
    #[must_use]
    pub fn is_valid_move(&self, player: &Player, direction: Direction) -> bool {
        self.check_move(player, direction).is_ok()
    }

    /// Pick up a gem at the player's current position.
    ///
    /// Returns `true` if a gem was collected. A cell without a gem is left
    /// alone.
    pub fn collect_gem(&mut self, player: &mut Player) -> bool {
        let pos = player.position();
        let Some((row, col)) = Self::index(pos) else {
            return false;
        };

        if !self.grid[row][col].is_gem() {
            return false;
        }

        self.grid[row][col] = Occupant::Empty;
        player.add_gem();
        info!(player = player.name(), at = %pos, total = player.gem_count(), "gem collected");
        true
    }

    /// Rendered rows, top to bottom, markers separated by single spaces.
    ///
    /// Lazily built; call again to see the current state.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.grid.iter().map(|row| {
            row.iter()
                .map(|cell| cell.marker())
                .collect::<Vec<_>>()
                .join(" ")
        })
    }

    /// Every cell with its position, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Occupant)> + '_ {
        self.grid.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &cell)| (Position::new(x as i32, y as i32), cell))
        })
    }

    /// Gems still on the board.
    #[must_use]
    pub fn gem_count(&self) -> usize {
        self.cells().filter(|(_, cell)| cell.is_gem()).count()
    }

    /// Obstacles on the board.
    #[must_use]
    pub fn obstacle_count(&self) -> usize {
        self.cells().filter(|(_, cell)| cell.is_obstacle()).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
