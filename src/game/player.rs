use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// Get the other player
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Single-character glyph used when rendering the board
    pub fn glyph(self) -> char {
        match self {
            Player::Red => 'X',
            Player::Yellow => 'O',
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Red.opponent(), Player::Yellow);
        assert_eq!(Player::Yellow.opponent(), Player::Red);
    }

    #[test]
    fn test_opponent_is_involutive() {
        for player in [Player::Red, Player::Yellow] {
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_player_glyph() {
        assert_eq!(Player::Red.glyph(), 'X');
        assert_eq!(Player::Yellow.glyph(), 'O');
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::Red.name(), "Red");
        assert_eq!(Player::Yellow.name(), "Yellow");
    }
}
