use std::fmt;

use tracing::{debug, info, instrument, warn};

use crate::board::BoardEngine;
use crate::error::MoveError;
use crate::outcome::GameOutcome;
use crate::player::{Player, MAX_PLAYERS, MIN_PLAYERS};
use crate::render;

/// Turn controller for a single game.
///
/// Owns the board for the length of the game. Players take turns in index
/// order, each move is checked against `is_column_free` before it reaches
/// the board, and after every placement the column is checked for a win and
/// then the board for a tie.
#[derive(Clone, Debug)]
pub struct Game<B> {
    board: B,
    num_players: usize,
    current_player: Player,
    move_history: Vec<usize>,
    outcome: Option<GameOutcome>,
}

impl<B: BoardEngine<Player>> Game<B> {
    /// Start a game on `board`. `num_players` is clamped to the supported
    /// range; use [`GameConfig`](crate::config::GameConfig) to reject bad
    /// values instead.
    pub fn new(board: B, num_players: usize) -> Self {
        Game {
            board,
            num_players: num_players.clamp(MIN_PLAYERS, MAX_PLAYERS),
            current_player: Player::first(),
            move_history: Vec::new(),
            outcome: None,
        }
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn num_players(&self) -> usize {
        self.num_players
    }

    /// The player to move next, or the winner once the game is won.
    pub fn turn(&self) -> Player {
        self.current_player
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Columns played so far, in order.
    pub fn move_history(&self) -> &[usize] {
        &self.move_history
    }

    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.free_columns()
    }

    pub fn is_legal_move(&self, column: usize) -> bool {
        !self.is_over() && self.board.is_column_free(column)
    }

    /// Drop the current player's token into `column`.
    ///
    /// Returns the outcome if this move ended the game.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, column: usize) -> Result<Option<GameOutcome>, MoveError> {
        if self.is_over() {
            warn!("move attempted after game over");
            return Err(MoveError::GameOver);
        }

        if !self.board.is_column_free(column) {
            let err = if column >= self.board.num_columns() {
                MoveError::InvalidColumn(column)
            } else {
                MoveError::ColumnFull(column)
            };
            warn!(%err, "rejected move");
            return Err(err);
        }

        let row = self.board.place_token(self.current_player, column)?;
        self.move_history.push(column);
        debug!(row, column, "token placed");

        if self.board.has_win_at(column) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_board_full() {
            self.outcome = Some(GameOutcome::Tie);
        } else {
            self.current_player = self.current_player.next(self.num_players);
        }

        if let Some(outcome) = self.outcome {
            info!(%outcome, moves = self.move_history.len(), "game over");
        }

        Ok(self.outcome)
    }
}

impl<B: BoardEngine<Player>> fmt::Display for Game<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Some(outcome) => writeln!(f, "{}", outcome)?,
            None => writeln!(f, "Player {} to move", self.current_player)?,
        }
        render::write_grid(&self.board, f)
    }
}
