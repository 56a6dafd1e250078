pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

/// Glyphs handed out to players in turn order.
pub const GLYPHS: [char; MAX_PLAYERS] = ['X', 'O', 'Y', 'Z', 'W', 'A', 'B', 'C', 'D', 'E'];

/// A player token. Wraps a player index in `0..MAX_PLAYERS`; the glyph is
/// derived from the index, never chosen by the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Player(u8);

impl Player {
    pub fn new(index: usize) -> Option<Player> {
        if index < MAX_PLAYERS {
            Some(Player(index as u8))
        } else {
            None
        }
    }

    /// The player who moves first.
    pub fn first() -> Player {
        Player(0)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn glyph(&self) -> char {
        GLYPHS[self.index()]
    }

    pub fn from_glyph(c: char) -> Option<Player> {
        let upper = c.to_ascii_uppercase();
        GLYPHS
            .iter()
            .position(|&g| g == upper)
            .and_then(Player::new)
    }

    /// The player whose turn follows this one in a game of `num_players`.
    pub fn next(&self, num_players: usize) -> Player {
        Player(((self.index() + 1) % num_players.clamp(1, MAX_PLAYERS)) as u8)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_order() {
        let glyphs: String = (0..MAX_PLAYERS)
            .filter_map(Player::new)
            .map(|p| p.glyph())
            .collect();
        assert_eq!(glyphs, "XOYZWABCDE");
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Player::new(MAX_PLAYERS).is_none());
        assert_eq!(Player::new(9).map(|p| p.glyph()), Some('E'));
    }

    #[test]
    fn test_from_glyph() {
        assert_eq!(Player::from_glyph('O'), Player::new(1));
        assert_eq!(Player::from_glyph('w'), Player::new(4));
        assert_eq!(Player::from_glyph('Q'), None);
        assert_eq!(Player::from_glyph(' '), None);
    }

    #[test]
    fn test_next_wraps() {
        let x = Player::first();
        let o = x.next(2);
        assert_eq!(o.glyph(), 'O');
        assert_eq!(o.next(2), x);

        let z = Player::from_glyph('Z').unwrap();
        assert_eq!(z.next(4), x);
        assert_eq!(z.next(5).glyph(), 'W');
    }
}
