//! Run detection shared by every [`BoardEngine`] implementation.
//!
//! Each check is anchored at one cell and only reads the board through
//! `value_at` and the dimension accessors.

use crate::board::{BoardEngine, Token};
use crate::position::Position;

/// True if `token` fills some `win_length`-wide window of the anchor's row
/// that lies within `win_length - 1` columns of the anchor.
#[cfg_attr(feature = "hotpath", hotpath::measure)]
pub fn horizontal_run<T, B>(board: &B, pos: &Position, token: T) -> bool
where
    T: Token,
    B: BoardEngine<T> + ?Sized,
{
    let k = board.win_length();
    if k == 0 || !pos.is_valid(board.num_rows(), board.num_columns()) {
        return false;
    }

    let left = pos.col.saturating_sub(k - 1);
    let right = (board.num_columns() - 1).min(pos.col + (k - 1));

    (left..=right)
        .take_while(|start| start + k - 1 <= right)
        .any(|start| {
            (start..start + k).all(|col| board.is_token_at(&Position::new(pos.row, col), token))
        })
}

/// True if the anchor and the `win_length - 1` cells below it all hold
/// `token`.
#[cfg_attr(feature = "hotpath", hotpath::measure)]
pub fn vertical_run<T, B>(board: &B, pos: &Position, token: T) -> bool
where
    T: Token,
    B: BoardEngine<T> + ?Sized,
{
    let k = board.win_length();
    if k == 0 || !pos.is_valid(board.num_rows(), board.num_columns()) || pos.row + 1 < k {
        return false;
    }

    (0..k).all(|i| board.is_token_at(&Position::new(pos.row - i, pos.col), token))
}

/// True if the anchor sits on a diagonal line of at least `win_length`
/// cells holding `token`, in either direction.
#[cfg_attr(feature = "hotpath", hotpath::measure)]
pub fn diagonal_run<T, B>(board: &B, pos: &Position, token: T) -> bool
where
    T: Token,
    B: BoardEngine<T> + ?Sized,
{
    // (up-right, down-left) then (up-left, down-right), each pair with its
    // own count that includes the anchor.
    const AXES: [[(isize, isize); 2]; 2] = [[(1, 1), (-1, -1)], [(1, -1), (-1, 1)]];

    let k = board.win_length();
    if !pos.is_valid(board.num_rows(), board.num_columns()) {
        return false;
    }

    for rays in AXES {
        let mut count = 1;
        for (d_row, d_col) in rays {
            if extend_ray(board, pos, token, (d_row, d_col), &mut count, k) {
                return true;
            }
        }
    }

    false
}

/// Walk from the anchor in one direction while cells hold `token`, bumping
/// `count` per cell. Returns true the moment `count` reaches `k`.
fn extend_ray<T, B>(
    board: &B,
    pos: &Position,
    token: T,
    (d_row, d_col): (isize, isize),
    count: &mut usize,
    k: usize,
) -> bool
where
    T: Token,
    B: BoardEngine<T> + ?Sized,
{
    let mut row = pos.row as isize + d_row;
    let mut col = pos.col as isize + d_col;

    while row >= 0
        && col >= 0
        && (row as usize) < board.num_rows()
        && (col as usize) < board.num_columns()
    {
        if !board.is_token_at(&Position::new(row as usize, col as usize), token) {
            break;
        }

        *count += 1;
        if *count == k {
            return true;
        }

        row += d_row;
        col += d_col;
    }

    false
}

/// Any of the horizontal, vertical or diagonal checks anchored at `pos`.
pub fn has_run_from<T, B>(board: &B, pos: &Position, token: T) -> bool
where
    T: Token,
    B: BoardEngine<T> + ?Sized,
{
    horizontal_run(board, pos, token)
        || vertical_run(board, pos, token)
        || diagonal_run(board, pos, token)
}

/// Check every occupied cell of `column`, bottom to top, each against its own
/// token.
#[cfg_attr(feature = "hotpath", hotpath::measure)]
pub fn column_has_win<T, B>(board: &B, column: usize) -> bool
where
    T: Token,
    B: BoardEngine<T> + ?Sized,
{
    if column >= board.num_columns() {
        return false;
    }

    (0..board.num_rows()).any(|row| {
        let pos = Position::new(row, column);
        match board.value_at(&pos) {
            Some(token) => has_run_from(board, &pos, token),
            None => false,
        }
    })
}

#[cfg_attr(feature = "hotpath", hotpath::measure)]
pub fn is_full<T, B>(board: &B) -> bool
where
    T: Token,
    B: BoardEngine<T> + ?Sized,
{
    (0..board.num_columns()).all(|col| {
        (0..board.num_rows()).all(|row| board.value_at(&Position::new(row, col)).is_some())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense::DenseBoard;

    fn board_from_columns(rows: usize, k: usize, columns: &[&str]) -> DenseBoard<char> {
        let mut board = DenseBoard::new(rows, columns.len(), k);
        for (col, stack) in columns.iter().enumerate() {
            for token in stack.chars() {
                board.place_token(token, col).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_horizontal_run_through_anchor() {
        let board = board_from_columns(3, 3, &["X", "X", "X", "O", ""]);
        for col in 0..3 {
            assert!(horizontal_run(&board, &Position::new(0, col), 'X'));
        }
        assert!(!horizontal_run(&board, &Position::new(0, 3), 'O'));
    }

    #[test]
    fn test_horizontal_run_not_containing_anchor() {
        // XXX...X: the run at 0..3 is out of reach of column 6.
        let board = board_from_columns(3, 3, &["X", "X", "X", "", "", "", "X"]);
        assert!(!horizontal_run(&board, &Position::new(0, 6), 'X'));
        assert!(horizontal_run(&board, &Position::new(0, 2), 'X'));
    }

    #[test]
    fn test_horizontal_run_interrupted() {
        let board = board_from_columns(3, 3, &["X", "X", "O", "X", "X"]);
        for col in [0, 1, 3, 4] {
            assert!(!horizontal_run(&board, &Position::new(0, col), 'X'));
        }
    }

    #[test]
    fn test_vertical_run_needs_enough_rows_below() {
        let board = board_from_columns(5, 3, &["XXX", "XX", "OXX"]);
        assert!(vertical_run(&board, &Position::new(2, 0), 'X'));
        assert!(!vertical_run(&board, &Position::new(1, 0), 'X'));
        assert!(!vertical_run(&board, &Position::new(1, 1), 'X'));
        assert!(!vertical_run(&board, &Position::new(2, 2), 'X'));
    }

    #[test]
    fn test_vertical_run_only_looks_down() {
        // The anchor at row 0 has XXX above it, but only downward counts.
        let board = board_from_columns(4, 3, &["XXX"]);
        assert!(!vertical_run(&board, &Position::new(0, 0), 'X'));
    }

    #[test]
    fn test_diagonal_up_right() {
        let board = board_from_columns(5, 3, &["X", "OX", "OOX", ""]);
        for i in 0..3 {
            assert!(diagonal_run(&board, &Position::new(i, i), 'X'));
        }
    }

    #[test]
    fn test_diagonal_up_left() {
        let board = board_from_columns(5, 3, &["", "OOX", "OX", "X"]);
        assert!(diagonal_run(&board, &Position::new(0, 3), 'X'));
        assert!(diagonal_run(&board, &Position::new(1, 2), 'X'));
        assert!(diagonal_run(&board, &Position::new(2, 1), 'X'));
    }

    #[test]
    fn test_diagonal_counters_do_not_mix() {
        // Two X on each diagonal through (1,1) but never three on one line.
        let board = board_from_columns(3, 3, &["XO", "OX", "XO"]);
        assert!(!diagonal_run(&board, &Position::new(1, 1), 'X'));
    }

    #[test]
    fn test_column_has_win_empty_and_out_of_range() {
        let board = board_from_columns(3, 3, &["", "", ""]);
        assert!(!column_has_win(&board, 0));
        assert!(!column_has_win(&board, 3));
    }

    #[test]
    fn test_off_board_anchor_is_never_a_run() {
        let board = board_from_columns(3, 3, &["XXX", "XXX", "XXX"]);
        for pos in [
            Position::new(0, usize::MAX),
            Position::new(usize::MAX, 0),
            Position::new(3, 1),
            Position::new(1, 3),
        ] {
            assert!(!horizontal_run(&board, &pos, 'X'), "horizontal at {}", pos);
            assert!(!vertical_run(&board, &pos, 'X'), "vertical at {}", pos);
            assert!(!diagonal_run(&board, &pos, 'X'), "diagonal at {}", pos);
            assert!(!has_run_from(&board, &pos, 'X'));
        }
    }

    #[test]
    fn test_is_full() {
        let board = board_from_columns(3, 3, &["XOO", "OXX", "XOO"]);
        assert!(is_full(&board));

        let board = board_from_columns(3, 3, &["XOO", "OXX", "XO"]);
        assert!(!is_full(&board));
    }
}
