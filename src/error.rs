use crate::position::Position;

/// Errors raised by a board when a placement or checked query violates its
/// bounds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column {column} is out of range (board has {columns} columns)")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("position {position} is out of range (board is {rows}x{columns})")]
    PositionOutOfRange {
        position: Position,
        rows: usize,
        columns: usize,
    },
}

/// Errors raised by [`Game::play`](crate::game::Game::play).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} does not exist")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("game is already over")]
    GameOver,
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::ColumnOutOfRange { column, .. } => MoveError::InvalidColumn(column),
            BoardError::ColumnFull(column) => MoveError::ColumnFull(column),
            BoardError::PositionOutOfRange { position, .. } => {
                MoveError::InvalidColumn(position.col)
            }
        }
    }
}

/// Errors raised when validating a [`GameConfig`](crate::config::GameConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    #[error("win length {win_length} cannot fit on a {rows}x{columns} board")]
    UnreachableWinLength {
        win_length: usize,
        rows: usize,
        columns: usize,
    },
}
