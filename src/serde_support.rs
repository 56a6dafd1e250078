use crate::board::BoardEngine;
use crate::config::GameConfig;
use crate::dense::DenseBoard;
use crate::game::Game;
use crate::player::Player;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<B: BoardEngine<Player>> Serialize for Game<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let moves: Vec<String> = self.move_history().iter().map(|c| c.to_string()).collect();
        let board = self.board();

        // "RxCxK/P:moves"
        let full = format!(
            "{}x{}x{}/{}:{}",
            board.num_rows(),
            board.num_columns(),
            board.win_length(),
            self.num_players(),
            moves.join(";")
        );
        serializer.serialize_str(&full)
    }
}

fn parse_field<E: serde::de::Error>(name: &str, s: &str) -> Result<usize, E> {
    s.trim()
        .parse()
        .map_err(|e| E::custom(format!("Invalid {}: {}", name, e)))
}

impl<'de> Deserialize<'de> for Game<DenseBoard<Player>> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        let (header, moves_str) = s
            .split_once(':')
            .ok_or_else(|| serde::de::Error::custom("Missing ':' after game header"))?;
        let (dims, players) = header
            .split_once('/')
            .ok_or_else(|| serde::de::Error::custom("Missing player count"))?;

        let parts: Vec<&str> = dims.split('x').collect();
        if parts.len() != 3 {
            return Err(serde::de::Error::custom(format!(
                "Invalid dimensions format: {}",
                dims
            )));
        }

        let config = GameConfig::new(
            parse_field("rows", parts[0])?,
            parse_field("columns", parts[1])?,
            parse_field("win length", parts[2])?,
            parse_field("player count", players)?,
        );
        config.validate().map_err(serde::de::Error::custom)?;

        let mut game = Game::new(
            DenseBoard::new(config.rows, config.columns, config.win_length),
            config.num_players,
        );

        if moves_str.is_empty() {
            return Ok(game);
        }

        for move_str in moves_str.split(';') {
            let column = parse_field("column", move_str)?;
            game.play(column).map_err(|e| {
                serde::de::Error::custom(format!("Illegal move {}: {}", column, e))
            })?;
        }

        Ok(game)
    }
}
