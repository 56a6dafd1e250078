use tracing::instrument;

use crate::board::{
    BoardEngine, MAX_COLUMNS, MAX_ROWS, MAX_WIN_LENGTH, MIN_COLUMNS, MIN_ROWS, MIN_WIN_LENGTH,
    STANDARD_COLUMNS, STANDARD_ROWS, STANDARD_WIN_LENGTH,
};
use crate::dense::DenseBoard;
use crate::error::ConfigError;
use crate::game::Game;
use crate::player::{Player, MAX_PLAYERS, MIN_PLAYERS};
use crate::sparse::SparseBoard;

/// A board chosen at runtime.
pub type BoxedBoard = Box<dyn BoardEngine<Player> + Send + Sync>;

/// Which storage strategy backs the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BoardKind {
    /// Full grid, constant-time lookups.
    #[default]
    Dense,
    /// Occupied cells only, for large boards that stay mostly empty.
    Sparse,
}

/// Everything needed to set up one game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub win_length: usize,
    pub num_players: usize,
    pub kind: BoardKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: STANDARD_ROWS,
            columns: STANDARD_COLUMNS,
            win_length: STANDARD_WIN_LENGTH,
            num_players: MIN_PLAYERS,
            kind: BoardKind::Dense,
        }
    }
}

fn check_range(
    field: &'static str,
    value: usize,
    min: usize,
    max: usize,
) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

impl GameConfig {
    pub fn new(rows: usize, columns: usize, win_length: usize, num_players: usize) -> Self {
        GameConfig {
            rows,
            columns,
            win_length,
            num_players,
            kind: BoardKind::default(),
        }
    }

    pub fn with_kind(mut self, kind: BoardKind) -> Self {
        self.kind = kind;
        self
    }

    /// Validate every value against the board and player limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("rows", self.rows, MIN_ROWS, MAX_ROWS)?;
        check_range("columns", self.columns, MIN_COLUMNS, MAX_COLUMNS)?;
        check_range("win_length", self.win_length, MIN_WIN_LENGTH, MAX_WIN_LENGTH)?;
        check_range("num_players", self.num_players, MIN_PLAYERS, MAX_PLAYERS)?;

        if self.win_length > self.rows.max(self.columns) {
            return Err(ConfigError::UnreachableWinLength {
                win_length: self.win_length,
                rows: self.rows,
                columns: self.columns,
            });
        }

        Ok(())
    }

    /// Build an empty board of the configured kind. Does not validate.
    pub fn build_board(&self) -> BoxedBoard {
        match self.kind {
            BoardKind::Dense => Box::new(DenseBoard::new(self.rows, self.columns, self.win_length)),
            BoardKind::Sparse => {
                Box::new(SparseBoard::new(self.rows, self.columns, self.win_length))
            }
        }
    }

    /// Validate, then start a game on a fresh board.
    #[instrument]
    pub fn new_game(&self) -> Result<Game<BoxedBoard>, ConfigError> {
        if let Err(e) = self.validate() {
            tracing::warn!(error = %e, "rejected game config");
            return Err(e);
        }
        Ok(Game::new(self.build_board(), self.num_players))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.kind, BoardKind::Dense);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(GameConfig::new(3, 3, 3, 2).validate().is_ok());
        assert!(GameConfig::new(100, 100, 25, 10).validate().is_ok());
    }

    #[test]
    fn test_rejects_each_field() {
        assert_eq!(
            GameConfig::new(2, 7, 3, 2).validate(),
            Err(ConfigError::OutOfRange {
                field: "rows",
                value: 2,
                min: MIN_ROWS,
                max: MAX_ROWS
            })
        );
        assert!(matches!(
            GameConfig::new(6, 101, 4, 2).validate(),
            Err(ConfigError::OutOfRange {
                field: "columns",
                ..
            })
        ));
        assert!(matches!(
            GameConfig::new(30, 30, 26, 2).validate(),
            Err(ConfigError::OutOfRange {
                field: "win_length",
                ..
            })
        ));
        assert!(matches!(
            GameConfig::new(6, 7, 4, 1).validate(),
            Err(ConfigError::OutOfRange {
                field: "num_players",
                ..
            })
        ));
        assert!(matches!(
            GameConfig::new(6, 7, 4, 11).validate(),
            Err(ConfigError::OutOfRange {
                field: "num_players",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_unreachable_win_length() {
        assert_eq!(
            GameConfig::new(3, 4, 5, 2).validate(),
            Err(ConfigError::UnreachableWinLength {
                win_length: 5,
                rows: 3,
                columns: 4
            })
        );
        assert!(GameConfig::new(3, 5, 5, 2).validate().is_ok());
    }

    #[test]
    fn test_build_board_matches_config() {
        for kind in [BoardKind::Dense, BoardKind::Sparse] {
            let board = GameConfig::new(5, 8, 4, 3).with_kind(kind).build_board();
            assert_eq!(board.num_rows(), 5);
            assert_eq!(board.num_columns(), 8);
            assert_eq!(board.win_length(), 4);
            assert_eq!(board.free_columns().len(), 8);
        }
    }

    #[test]
    fn test_new_game_validates() {
        assert!(GameConfig::new(2, 2, 3, 2).new_game().is_err());

        let game = GameConfig::new(4, 4, 3, 3).new_game().unwrap();
        assert_eq!(game.num_players(), 3);
        assert!(!game.is_over());
    }
}
