/// A cell on the board. Row 0 is the bottom row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    pub fn to_index(&self, columns: usize) -> usize {
        self.row * columns + self.col
    }

    pub fn is_valid(&self, rows: usize, columns: usize) -> bool {
        self.row < rows && self.col < columns
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}
