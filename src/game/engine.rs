//! Turn sequencing and the interactive loop.

use std::io;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::io::{GameOutput, MoveInput};
use crate::board::Board;
use crate::core::{Direction, GameRng, Player, PlayerId, Position};
use crate::error::{GameError, MoveError};
use crate::rules::{GameResult, PLAYER_ONE_START, PLAYER_TWO_START, TURN_LIMIT};

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// Player 1 to move.
    Player1Turn,
    /// Player 2 to move.
    Player2Turn,
    /// Turn limit reached; no more moves are accepted.
    GameOver,
}

/// What a successful move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Who moved.
    pub player: PlayerId,
    /// The step that was taken.
    pub direction: Direction,
    /// Where the player ended up.
    pub to: Position,
    /// Whether a gem was picked up at `to`.
    pub collected: bool,
    /// Valid moves made so far, including this one.
    pub turn: u32,
}

/// A two-player game from first move to verdict.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    current: PlayerId,
    turns: u32,
    seed: Option<u64>,
}

impl Game {
    /// Start a game on a board generated from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::with_rng(&mut GameRng::new(seed))
        }
    }

    /// Start a game on a board generated from `rng`.
    ///
    /// The rng may already have been drawn from, so no seed is recorded;
    /// [`Game::seed`] returns `None`.
    pub fn with_rng(rng: &mut GameRng) -> Self {
        Self::with_board(Board::generate(rng))
    }

    /// Start a game on a fixed layout.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            players: [
                Player::new(PlayerId::One, PLAYER_ONE_START),
                Player::new(PlayerId::Two, PLAYER_TWO_START),
            ],
            current: PlayerId::One,
            turns: 0,
            seed: None,
        }
    }

    /// The board, including any gems not yet collected.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player sitting in seat `id`.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Valid moves made so far, by both players combined.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turns
    }

    /// Seed passed to [`Game::new`]. `None` for games built from an rng or a
    /// fixed board.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Whether the turn limit has been reached.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.turns >= TURN_LIMIT
    }

    /// Whose turn it is, or [`TurnState::GameOver`].
    #[must_use]
    pub fn state(&self) -> TurnState {
        if self.is_over() {
            return TurnState::GameOver;
        }
        match self.current {
            PlayerId::One => TurnState::Player1Turn,
            PlayerId::Two => TurnState::Player2Turn,
        }
    }

    /// Who is ahead right now, by gem count.
    #[must_use]
    pub fn standings(&self) -> GameResult {
        GameResult::from_gem_counts(
            self.player(PlayerId::One).gem_count(),
            self.player(PlayerId::Two).gem_count(),
        )
    }

    /// The final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.is_over().then(|| self.standings())
    }

    /// Play one move from an input character (`U/D/L/R`, any case).
    ///
    /// On error nothing changes and the same player is still to move.
    pub fn play_turn(&mut self, input: char) -> Result<TurnOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let direction = Direction::try_from(input).inspect_err(|err| {
            debug!(player = %self.current, %err, "move rejected");
        })?;
        self.play_move(direction)
    }

    /// Play one move for the current player.
    ///
    /// Validates against the board, moves the player, collects any gem at
    /// the destination, then passes the turn.
    pub fn play_move(&mut self, direction: Direction) -> Result<TurnOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current;
        let player = &mut self.players[mover.index()];

        let to = match self.board.check_move(player, direction) {
            Ok(to) => to,
            Err(err) => {
                debug!(player = %mover, %err, "move rejected");
                return Err(err);
            }
        };

        player.move_by(direction);
        let collected = self.board.collect_gem(player);

        self.turns += 1;
        self.current = mover.opponent();
        trace!(player = %mover, %direction, to = %to, turn = self.turns, "move applied");

        Ok(TurnOutcome {
            player: mover,
            direction,
            to,
            collected,
            turn: self.turns,
        })
    }

    /// Run the game to completion.
    ///
    /// Each iteration shows the turn number, the board and whose turn it is,
    /// then asks `input` for a move. Invalid moves are reported and the same
    /// player is asked again. Ends with [`Game::announce_winner`].
    pub fn run<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<GameResult, GameError>
    where
        I: MoveInput + ?Sized,
        O: GameOutput + ?Sized,
    {
        while !self.is_over() {
            output.line(&format!("Turn {}", self.turns + 1))?;
            for row in self.board.rows() {
                output.line(&row)?;
            }
            output.line(&format!("Current player: {}", self.current_player().name()))?;
            output.prompt("Enter move (U/D/L/R): ")?;

            let Some(c) = input.next_move(self.current_player())? else {
                return Err(GameError::InputClosed);
            };

            match self.play_turn(c) {
                Ok(outcome) if outcome.collected => {
                    let name = self.player(outcome.player).name();
                    output.line(&format!("{name} collected a gem!"))?;
                }
                Ok(_) => {}
                Err(err) => {
                    output.line("Invalid move. Try again.")?;
                    output.line(&err.to_string())?;
                }
            }
        }

        Ok(self.announce_winner(output)?)
    }

    /// Report both gem counts and the verdict.
    pub fn announce_winner<O>(&self, output: &mut O) -> io::Result<GameResult>
    where
        O: GameOutput + ?Sized,
    {
        output.line("Game Over!")?;
        for id in PlayerId::ALL {
            output.line(&format!("{id} collected {} gems.", self.player(id).gem_count()))?;
        }

        let result = self.standings();
        output.line(&result.to_string())?;
        info!(
            p1 = self.player(PlayerId::One).gem_count(),
            p2 = self.player(PlayerId::Two).gem_count(),
            ?result,
            "game over"
        );
        Ok(result)
    }
}
