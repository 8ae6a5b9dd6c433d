//! Play complete games between two agents and keep score.

use tracing::info;

use crate::ai::Agent;
use crate::game::{Board, GameStatus, Player};

/// Result of a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub winner: Option<Player>,
    /// Columns played, Red first.
    pub moves: Vec<usize>,
}

/// Play one game on a fresh board. Red moves first.
///
/// Panics if an agent picks a column that cannot be played.
pub fn play_game(red: &mut dyn Agent, yellow: &mut dyn Agent) -> GameRecord {
    red.new_game(Player::Red);
    yellow.new_game(Player::Yellow);

    let mut board = Board::new();
    let mut player = Player::Red;

    while !board.is_terminal() {
        let agent: &mut dyn Agent = match player {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };
        let column = agent.select_move(&mut board);
        if let Err(err) = board.drop_piece(column, player) {
            panic!(
                "{} selected illegal column {} (open: {:?}): {err}",
                agent.name(),
                column,
                board.open_columns()
            );
        }
        player = player.opponent();
    }

    let winner = match board.status() {
        GameStatus::Won(winner) => Some(winner),
        GameStatus::Drawn => None,
        status => unreachable!("finished game has status {status:?}"),
    };
    let moves: Vec<usize> = board.history().iter().map(|m| m.column).collect();

    info!(
        red = red.name(),
        yellow = yellow.name(),
        winner = winner.map(Player::name).unwrap_or("draw"),
        length = moves.len(),
        "game finished"
    );

    GameRecord { winner, moves }
}

/// Win/draw counts over a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchTally {
    pub red_wins: usize,
    pub yellow_wins: usize,
    pub draws: usize,
}

impl MatchTally {
    pub fn record(&mut self, game: &GameRecord) {
        match game.winner {
            Some(Player::Red) => self.red_wins += 1,
            Some(Player::Yellow) => self.yellow_wins += 1,
            None => self.draws += 1,
        }
    }

    pub fn games(&self) -> usize {
        self.red_wins + self.yellow_wins + self.draws
    }

    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::Red => self.red_wins,
            Player::Yellow => self.yellow_wins,
        }
    }

    pub fn win_rate(&self, player: Player) -> f32 {
        if self.games() == 0 {
            return 0.0;
        }
        self.wins(player) as f32 / self.games() as f32
    }

    pub fn draw_rate(&self) -> f32 {
        if self.games() == 0 {
            return 0.0;
        }
        self.draws as f32 / self.games() as f32
    }
}

/// Play `games` games with the same seating and tally the results.
pub fn play_match(red: &mut dyn Agent, yellow: &mut dyn Agent, games: usize) -> MatchTally {
    let mut tally = MatchTally::default();
    for _ in 0..games {
        let record = play_game(red, yellow);
        tally.record(&record);
    }
    tally
}
