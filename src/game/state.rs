use super::Player;

/// Cached status of a board, recomputed after every placement or undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    NotStarted,
    InProgress,
    Won(Player),
    Drawn,
}

impl GameStatus {
    /// Check if the game is over
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won(_) | GameStatus::Drawn)
    }

    /// Winner of the game, if there is one
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// A placed piece. `column` is 1-indexed, `row` counts from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub column: usize,
    pub row: usize,
    pub player: Player,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_is_not_started() {
        assert_eq!(GameStatus::default(), GameStatus::NotStarted);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!GameStatus::NotStarted.is_terminal());
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Won(Player::Red).is_terminal());
        assert!(GameStatus::Drawn.is_terminal());
    }

    #[test]
    fn test_winner() {
        assert_eq!(GameStatus::Won(Player::Yellow).winner(), Some(Player::Yellow));
        assert_eq!(GameStatus::Drawn.winner(), None);
        assert_eq!(GameStatus::InProgress.winner(), None);
    }
}
