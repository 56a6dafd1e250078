use std::fmt;
use std::hash::Hash;

use crate::error::BoardError;
use crate::position::Position;
use crate::scan;

pub const MIN_ROWS: usize = 3;
pub const MAX_ROWS: usize = 100;
pub const MIN_COLUMNS: usize = 3;
pub const MAX_COLUMNS: usize = 100;
pub const MIN_WIN_LENGTH: usize = 3;
pub const MAX_WIN_LENGTH: usize = 25;

pub const STANDARD_ROWS: usize = 6;
pub const STANDARD_COLUMNS: usize = 7;
pub const STANDARD_WIN_LENGTH: usize = 4;

/// Anything that can occupy a cell. Boards only ever compare tokens, so any
/// small copyable value works.
pub trait Token: Copy + Eq + Hash + fmt::Debug {}

impl<T: Copy + Eq + Hash + fmt::Debug> Token for T {}

/// The board contract shared by every storage strategy.
///
/// Implementors provide placement, cell lookup and the fixed dimensions; the
/// win, tie and column predicates are derived from those through the
/// functions in [`scan`], so every strategy judges a position the same way.
///
/// Rows are counted from the bottom: row 0 is where the first token in a
/// column lands.
pub trait BoardEngine<T: Token> {
    fn num_rows(&self) -> usize;

    fn num_columns(&self) -> usize;

    /// Number of same-token cells in a line needed to win.
    fn win_length(&self) -> usize;

    /// The token at `pos`, or `None` if the cell is empty or off the board.
    fn value_at(&self, pos: &Position) -> Option<T>;

    /// Drop `token` into `column`. It lands on the lowest empty row, which is
    /// returned.
    fn place_token(&mut self, token: T, column: usize) -> Result<usize, BoardError>;

    /// True if the top cell of `column` is still empty.
    fn is_column_free(&self, column: usize) -> bool {
        match self.num_rows().checked_sub(1) {
            Some(top) if column < self.num_columns() => {
                self.value_at(&Position::new(top, column)).is_none()
            }
            _ => false,
        }
    }

    fn is_token_at(&self, pos: &Position, token: T) -> bool {
        self.value_at(pos) == Some(token)
    }

    /// True if any occupied cell in `column` is part of a winning line for its
    /// own token.
    ///
    /// Every occupied cell is checked, not only the most recent placement. A
    /// run completed lower in the column therefore still reports a win after
    /// another token has been stacked on top. Use [`has_win_from`] to check a
    /// single cell.
    ///
    /// [`has_win_from`]: BoardEngine::has_win_from
    fn has_win_at(&self, column: usize) -> bool {
        scan::column_has_win(self, column)
    }

    /// True if the token at `pos` is part of a winning line.
    fn has_win_from(&self, pos: &Position) -> bool {
        match self.value_at(pos) {
            Some(token) => scan::has_run_from(self, pos, token),
            None => false,
        }
    }

    /// True once no empty cell remains. Only meaningful as a tie after the
    /// win checks have come back negative.
    fn is_board_full(&self) -> bool {
        scan::is_full(self)
    }

    fn free_columns(&self) -> Vec<usize> {
        (0..self.num_columns())
            .filter(|&col| self.is_column_free(col))
            .collect()
    }

    /// Number of tokens stacked in `column`.
    fn column_height(&self, column: usize) -> usize {
        (0..self.num_rows())
            .take_while(|&row| self.value_at(&Position::new(row, column)).is_some())
            .count()
    }

    fn try_value_at(&self, pos: &Position) -> Result<Option<T>, BoardError> {
        if pos.is_valid(self.num_rows(), self.num_columns()) {
            Ok(self.value_at(pos))
        } else {
            Err(BoardError::PositionOutOfRange {
                position: *pos,
                rows: self.num_rows(),
                columns: self.num_columns(),
            })
        }
    }
}

impl<T: Token, B: BoardEngine<T> + ?Sized> BoardEngine<T> for Box<B> {
    fn num_rows(&self) -> usize {
        (**self).num_rows()
    }

    fn num_columns(&self) -> usize {
        (**self).num_columns()
    }

    fn win_length(&self) -> usize {
        (**self).win_length()
    }

    fn value_at(&self, pos: &Position) -> Option<T> {
        (**self).value_at(pos)
    }

    fn place_token(&mut self, token: T, column: usize) -> Result<usize, BoardError> {
        (**self).place_token(token, column)
    }

    fn is_column_free(&self, column: usize) -> bool {
        (**self).is_column_free(column)
    }

    fn is_token_at(&self, pos: &Position, token: T) -> bool {
        (**self).is_token_at(pos, token)
    }

    fn has_win_at(&self, column: usize) -> bool {
        (**self).has_win_at(column)
    }

    fn has_win_from(&self, pos: &Position) -> bool {
        (**self).has_win_from(pos)
    }

    fn is_board_full(&self) -> bool {
        (**self).is_board_full()
    }
}

/// Find the row a token dropped into `column` would land on, using only
/// `value_at`.
pub(crate) fn landing_row<T, B>(board: &B, column: usize) -> Result<usize, BoardError>
where
    T: Token,
    B: BoardEngine<T> + ?Sized,
{
    if column >= board.num_columns() {
        return Err(BoardError::ColumnOutOfRange {
            column,
            columns: board.num_columns(),
        });
    }

    (0..board.num_rows())
        .find(|&row| board.value_at(&Position::new(row, column)).is_none())
        .ok_or(BoardError::ColumnFull(column))
}
