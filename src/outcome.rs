use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Tie,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Winner(player) => Some(*player),
            GameOutcome::Tie => None,
        }
    }

    pub fn is_tie(&self) -> bool {
        matches!(self, GameOutcome::Tie)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Winner(player) => write!(f, "Player {} wins", player),
            GameOutcome::Tie => write!(f, "Tie"),
        }
    }
}
