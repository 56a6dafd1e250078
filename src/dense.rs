use std::fmt;

use crate::board::{
    landing_row, BoardEngine, Token, STANDARD_COLUMNS, STANDARD_ROWS, STANDARD_WIN_LENGTH,
};
use crate::error::BoardError;
use crate::player::Player;
use crate::position::Position;
use crate::render;

/// A board backed by a fully allocated grid. Cell lookup is a single index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseBoard<T> {
    // Row-major, row 0 first.
    cells: Vec<Option<T>>,
    rows: usize,
    columns: usize,
    win_length: usize,
}

impl<T: Token> DenseBoard<T> {
    /// Dimensions are trusted as given; validate them with
    /// [`GameConfig`](crate::config::GameConfig) first.
    pub fn new(rows: usize, columns: usize, win_length: usize) -> Self {
        DenseBoard {
            cells: vec![None; rows * columns],
            rows,
            columns,
            win_length,
        }
    }
}

impl<T: Token> BoardEngine<T> for DenseBoard<T> {
    fn num_rows(&self) -> usize {
        self.rows
    }

    fn num_columns(&self) -> usize {
        self.columns
    }

    fn win_length(&self) -> usize {
        self.win_length
    }

    #[inline]
    fn value_at(&self, pos: &Position) -> Option<T> {
        if pos.is_valid(self.rows, self.columns) {
            self.cells[pos.to_index(self.columns)]
        } else {
            None
        }
    }

    fn place_token(&mut self, token: T, column: usize) -> Result<usize, BoardError> {
        let row = landing_row(&*self, column)?;
        let idx = Position::new(row, column).to_index(self.columns);
        self.cells[idx] = Some(token);
        tracing::trace!(?token, row, column, "placed token");
        Ok(row)
    }
}

impl Default for DenseBoard<Player> {
    fn default() -> Self {
        Self::new(STANDARD_ROWS, STANDARD_COLUMNS, STANDARD_WIN_LENGTH)
    }
}

impl<T: Token + fmt::Display> fmt::Display for DenseBoard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_grid(self, f)
    }
}
