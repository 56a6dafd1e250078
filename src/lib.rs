pub mod board;
pub mod config;
pub mod dense;
pub mod error;
pub mod game;
pub mod outcome;
pub mod player;
pub mod position;
pub mod render;
pub mod scan;
pub mod sparse;

#[cfg(feature = "serde")]
pub mod serde_support;

pub use board::BoardEngine;
pub use config::{BoardKind, BoxedBoard, GameConfig};
pub use dense::DenseBoard;
pub use error::{BoardError, ConfigError, MoveError};
pub use game::Game;
pub use outcome::GameOutcome;
pub use player::Player;
pub use position::Position;
pub use sparse::SparseBoard;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn connectx(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use python_bindings::*;
    m.add_class::<PyDenseBoard>()?;
    m.add_class::<PySparseBoard>()?;
    m.add_class::<PyGame>()?;
    m.add("MIN_ROWS", board::MIN_ROWS)?;
    m.add("MAX_ROWS", board::MAX_ROWS)?;
    m.add("MIN_COLUMNS", board::MIN_COLUMNS)?;
    m.add("MAX_COLUMNS", board::MAX_COLUMNS)?;
    m.add("MIN_WIN_LENGTH", board::MIN_WIN_LENGTH)?;
    m.add("MAX_WIN_LENGTH", board::MAX_WIN_LENGTH)?;
    m.add("MAX_PLAYERS", player::MAX_PLAYERS)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::board::BoardEngine;
    use crate::config::{BoardKind, BoxedBoard, GameConfig};
    use crate::dense::DenseBoard;
    use crate::game::Game;
    use crate::player::Player;
    use crate::position::Position;
    use crate::sparse::SparseBoard;

    fn value_error(msg: impl Into<String>) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(msg.into())
    }

    fn validated(rows: usize, columns: usize, win_length: usize) -> PyResult<GameConfig> {
        let config = GameConfig::new(rows, columns, win_length, player::MIN_PLAYERS);
        config.validate().map_err(|e| value_error(e.to_string()))?;
        Ok(config)
    }

    fn player_from_glyph(glyph: char) -> PyResult<Player> {
        Player::from_glyph(glyph).ok_or_else(|| value_error(format!("Unknown token {:?}", glyph)))
    }

    macro_rules! py_board {
        ($kind:ident, $name:tt) => {
            paste::paste! {
                #[pyclass(name = $name)]
                #[derive(Clone)]
                pub struct [<Py $kind Board>] {
                    board: [<$kind Board>]<Player>,
                }

                #[pymethods]
                impl [<Py $kind Board>] {
                    #[new]
                    pub fn new(rows: usize, columns: usize, win_length: usize) -> PyResult<Self> {
                        let config = validated(rows, columns, win_length)?;
                        Ok([<Py $kind Board>] {
                            board: [<$kind Board>]::new(config.rows, config.columns, config.win_length),
                        })
                    }

                    pub fn num_rows(&self) -> usize {
                        self.board.num_rows()
                    }

                    pub fn num_columns(&self) -> usize {
                        self.board.num_columns()
                    }

                    pub fn win_length(&self) -> usize {
                        self.board.win_length()
                    }

                    pub fn place_token(&mut self, token: char, column: usize) -> PyResult<usize> {
                        let player = player_from_glyph(token)?;
                        self.board
                            .place_token(player, column)
                            .map_err(|e| value_error(e.to_string()))
                    }

                    pub fn value_at(&self, row: usize, col: usize) -> Option<char> {
                        self.board
                            .value_at(&Position::new(row, col))
                            .map(|p| p.glyph())
                    }

                    pub fn is_column_free(&self, column: usize) -> bool {
                        self.board.is_column_free(column)
                    }

                    pub fn has_win_at(&self, column: usize) -> bool {
                        self.board.has_win_at(column)
                    }

                    pub fn is_board_full(&self) -> bool {
                        self.board.is_board_full()
                    }

                    pub fn free_columns(&self) -> Vec<usize> {
                        self.board.free_columns()
                    }

                    pub fn __str__(&self) -> String {
                        self.board.to_string()
                    }

                    pub fn __repr__(&self) -> String {
                        format!(
                            "{}(rows={}, columns={}, win_length={})",
                            $name,
                            self.board.num_rows(),
                            self.board.num_columns(),
                            self.board.win_length()
                        )
                    }
                }
            }
        };
    }

    py_board!(Dense, "DenseBoard");
    py_board!(Sparse, "SparseBoard");

    #[pyclass(name = "Game")]
    pub struct PyGame {
        game: Game<BoxedBoard>,
    }

    #[pymethods]
    impl PyGame {
        #[new]
        #[pyo3(signature = (rows, columns, win_length, num_players, sparse = false))]
        pub fn new(
            rows: usize,
            columns: usize,
            win_length: usize,
            num_players: usize,
            sparse: bool,
        ) -> PyResult<Self> {
            let kind = if sparse {
                BoardKind::Sparse
            } else {
                BoardKind::Dense
            };
            let game = GameConfig::new(rows, columns, win_length, num_players)
                .with_kind(kind)
                .new_game()
                .map_err(|e| value_error(e.to_string()))?;
            Ok(PyGame { game })
        }

        pub fn play(&mut self, column: usize) -> PyResult<Option<String>> {
            self.game
                .play(column)
                .map(|outcome| outcome.map(|o| o.to_string()))
                .map_err(|e| value_error(e.to_string()))
        }

        pub fn turn(&self) -> char {
            self.game.turn().glyph()
        }

        pub fn is_over(&self) -> bool {
            self.game.is_over()
        }

        pub fn winner(&self) -> Option<char> {
            self.game
                .outcome()
                .and_then(|o| o.winner())
                .map(|p| p.glyph())
        }

        pub fn is_tie(&self) -> bool {
            self.game.outcome().is_some_and(|o| o.is_tie())
        }

        pub fn legal_columns(&self) -> Vec<usize> {
            self.game.legal_columns()
        }

        pub fn move_history(&self) -> Vec<usize> {
            self.game.move_history().to_vec()
        }

        pub fn value_at(&self, row: usize, col: usize) -> Option<char> {
            self.game
                .board()
                .value_at(&Position::new(row, col))
                .map(|p| p.glyph())
        }

        pub fn __str__(&self) -> String {
            self.game.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Game(rows={}, columns={}, players={}, over={})",
                self.game.board().num_rows(),
                self.game.board().num_columns(),
                self.game.num_players(),
                self.game.is_over()
            )
        }
    }
}
