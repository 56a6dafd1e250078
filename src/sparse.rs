use std::collections::HashMap;
use std::fmt;

use crate::board::{landing_row, BoardEngine, Token};
use crate::error::BoardError;
use crate::position::Position;
use crate::render;

/// A board that only stores occupied cells, grouped by token.
///
/// Nothing is allocated for empty cells, so memory grows with the number of
/// tokens played rather than with the board area. The price is that
/// `value_at` has to search every token's positions, and placement does that
/// once per row it probes.
#[derive(Clone, Debug)]
pub struct SparseBoard<T> {
    // Positions per token, in the order they were placed. Tokens that have
    // never been placed have no entry.
    tokens: HashMap<T, Vec<Position>>,
    placed: usize,
    rows: usize,
    columns: usize,
    win_length: usize,
}

impl<T: Token> SparseBoard<T> {
    pub fn new(rows: usize, columns: usize, win_length: usize) -> Self {
        SparseBoard {
            tokens: HashMap::new(),
            placed: 0,
            rows,
            columns,
            win_length,
        }
    }

    /// Positions held by `token`, oldest first.
    pub fn positions_of(&self, token: T) -> &[Position] {
        self.tokens.get(&token).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn placed_count(&self) -> usize {
        self.placed
    }
}

impl<T: Token> BoardEngine<T> for SparseBoard<T> {
    fn num_rows(&self) -> usize {
        self.rows
    }

    fn num_columns(&self) -> usize {
        self.columns
    }

    fn win_length(&self) -> usize {
        self.win_length
    }

    fn value_at(&self, pos: &Position) -> Option<T> {
        self.tokens
            .iter()
            .find(|(_, positions)| positions.contains(pos))
            .map(|(token, _)| *token)
    }

    fn place_token(&mut self, token: T, column: usize) -> Result<usize, BoardError> {
        let row = landing_row(&*self, column)?;
        self.tokens
            .entry(token)
            .or_default()
            .push(Position::new(row, column));
        self.placed += 1;
        tracing::trace!(?token, row, column, "placed token");
        Ok(row)
    }

    // Only the token's own list needs searching.
    fn is_token_at(&self, pos: &Position, token: T) -> bool {
        self.tokens
            .get(&token)
            .is_some_and(|positions| positions.contains(pos))
    }
}

impl<T: Token + fmt::Display> fmt::Display for SparseBoard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_grid(self, f)
    }
}
