use std::fmt;

use crate::board::{BoardEngine, Token};
use crate::position::Position;

/// Write the board as a text grid: a header of column indices, then one line
/// per row from the top down, every cell framed by `|`.
pub fn write_grid<T, B, W>(board: &B, out: &mut W) -> fmt::Result
where
    T: Token + fmt::Display,
    B: BoardEngine<T> + ?Sized,
    W: fmt::Write,
{
    for col in 0..board.num_columns() {
        if col <= 9 {
            write!(out, "| {}", col)?;
        } else {
            write!(out, "|{}", col)?;
        }
    }
    writeln!(out, "|")?;

    for row in (0..board.num_rows()).rev() {
        write!(out, "|")?;
        for col in 0..board.num_columns() {
            match board.value_at(&Position::new(row, col)) {
                Some(token) => write!(out, "{} |", token)?,
                None => write!(out, "  |")?,
            }
        }
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::board::BoardEngine;
    use crate::dense::DenseBoard;

    #[test]
    fn test_render_empty() {
        let board: DenseBoard<char> = DenseBoard::new(3, 3, 3);
        assert_eq!(
            board.to_string(),
            "| 0| 1| 2|\n|  |  |  |\n|  |  |  |\n|  |  |  |\n"
        );
    }

    #[test]
    fn test_render_bottom_row_last() {
        let mut board = DenseBoard::new(3, 4, 3);
        board.place_token('X', 0).unwrap();
        board.place_token('O', 0).unwrap();
        board.place_token('X', 3).unwrap();
        assert_eq!(
            board.to_string(),
            "| 0| 1| 2| 3|\n|  |  |  |  |\n|O |  |  |  |\n|X |  |  |X |\n"
        );
    }

    #[test]
    fn test_render_two_digit_header() {
        let board: DenseBoard<char> = DenseBoard::new(3, 12, 3);
        let text = board.to_string();
        let header = text.lines().next().unwrap();
        assert_eq!(header, "| 0| 1| 2| 3| 4| 5| 6| 7| 8| 9|10|11|");
    }
}
