use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use super::agent::Agent;
use super::random::{choose_column, random_open_column};
use super::strength::{SearchProfile, Strength, TieBreak, CENTER_ORDER};
use crate::game::{Board, GameStatus, Player};

/// Score of a position the engine has won.
pub const WIN_SCORE: i32 = 100;
/// Score of a position the opponent has won.
pub const LOSS_SCORE: i32 = -100;
/// Score of a draw, or of a position where the search ran out of depth.
pub const NEUTRAL_SCORE: i32 = 0;

const INFINITY: i32 = i32::MAX;

/// Outcome of one root search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Best minimax score found for the engine's player.
    pub score: i32,
    /// Every column achieving `score`, in search order.
    pub best_columns: Vec<usize>,
    pub depth: u32,
    pub nodes: u64,
    /// The node limit stopped the search before it finished.
    pub truncated: bool,
}

/// Minimax opponent that plays one colour at a configurable strength.
///
/// The engine borrows the board mutably for the duration of a search and
/// explores by playing and retracting moves in place. It always hands the
/// board back exactly as it received it.
pub struct SearchEngine {
    player: Player,
    strength: Strength,
    move_count: u32,
    node_limit: Option<u64>,
    rng: StdRng,
    nodes: u64,
    truncated: bool,
}

impl SearchEngine {
    pub fn new(player: Player, strength: Strength) -> Self {
        Self::with_rng(player, strength, StdRng::from_os_rng())
    }

    /// Engine with a deterministic random source for ties and the random tier.
    pub fn with_seed(player: Player, strength: Strength, seed: u64) -> Self {
        Self::with_rng(player, strength, StdRng::seed_from_u64(seed))
    }

    fn with_rng(player: Player, strength: Strength, rng: StdRng) -> Self {
        SearchEngine {
            player,
            strength,
            move_count: 0,
            node_limit: None,
            rng,
            nodes: 0,
            truncated: false,
        }
    }

    /// Stop searching after `limit` nodes and play the best fully searched
    /// root move. `None` searches to completion.
    pub fn with_node_limit(mut self, limit: Option<u64>) -> Self {
        self.node_limit = limit;
        self
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    pub fn set_strength(&mut self, strength: Strength) {
        self.strength = strength;
    }

    /// Number of moves this engine has chosen since the last reset.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn reset(&mut self) {
        self.move_count = 0;
    }

    /// Choose a column for the engine's player.
    ///
    /// # Panics
    ///
    /// Panics if the game on `board` is already over; the caller checks the
    /// status before asking for a move.
    pub fn find_best_move(&mut self, board: &mut Board) -> usize {
        assert!(
            !board.is_terminal(),
            "find_best_move called on a finished game ({:?})",
            board.status()
        );

        let column = match self.strength.profile(self.move_count) {
            None => random_open_column(&mut self.rng, board),
            Some(profile) => {
                let report = self.search(board, &profile);
                self.select(board, &profile, &report)
            }
        };

        self.move_count += 1;
        column
    }

    /// Run the current tier's search without choosing a move.
    ///
    /// The random tier does not search; it reports every open column as a
    /// neutral candidate.
    pub fn analyze(&mut self, board: &mut Board) -> SearchReport {
        assert!(
            !board.is_terminal(),
            "analyze called on a finished game ({:?})",
            board.status()
        );

        match self.strength.profile(self.move_count) {
            Some(profile) => self.search(board, &profile),
            None => SearchReport {
                score: NEUTRAL_SCORE,
                best_columns: board.open_columns(),
                depth: 0,
                nodes: 0,
                truncated: false,
            },
        }
    }

    fn search(&mut self, board: &mut Board, profile: &SearchProfile) -> SearchReport {
        self.nodes = 0;
        self.truncated = false;
        let pieces_before = board.pieces_played();
        let status_before = board.status();

        let mut best = -INFINITY;
        let mut best_columns = Vec::new();

        for &column in &profile.move_order {
            if !board.is_column_open(column) {
                continue;
            }

            // Anything scoring below `best` only needs an upper bound, so the
            // window opens just under it; ties still get exact scores.
            let alpha = if profile.pruning && best > -INFINITY {
                best - 1
            } else {
                -INFINITY
            };

            Self::play(board, column, self.player);
            let score = self.minimax(
                board,
                profile,
                profile.depth - 1,
                alpha,
                INFINITY,
                self.player.opponent(),
            );
            Self::retract(board);

            if self.truncated {
                break;
            }

            if score > best {
                best = score;
                best_columns.clear();
                best_columns.push(column);
            } else if score == best {
                best_columns.push(column);
            }
        }

        if best_columns.is_empty() {
            let fallback = profile
                .move_order
                .iter()
                .copied()
                .find(|&column| board.is_column_open(column))
                .unwrap_or_else(|| panic!("no open column on a non-terminal board"));
            best = NEUTRAL_SCORE;
            best_columns.push(fallback);
        }

        assert_eq!(
            board.pieces_played(),
            pieces_before,
            "search left moves on the board"
        );
        assert_eq!(board.status(), status_before, "search changed the board status");

        if self.truncated {
            warn!(
                nodes = self.nodes,
                limit = ?self.node_limit,
                "node limit reached, using the best fully searched move"
            );
        }
        debug!(
            strength = %self.strength,
            depth = profile.depth,
            score = best,
            nodes = self.nodes,
            candidates = ?best_columns,
            "search finished"
        );

        SearchReport {
            score: best,
            best_columns,
            depth: profile.depth,
            nodes: self.nodes,
            truncated: self.truncated,
        }
    }

    /// Depth-limited minimax from the perspective of `self.player`, with
    /// fail-soft alpha-beta cut-offs when the profile enables pruning.
    fn minimax(
        &mut self,
        board: &mut Board,
        profile: &SearchProfile,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        mover: Player,
    ) -> i32 {
        self.nodes += 1;

        match board.status() {
            GameStatus::Won(winner) if winner == self.player => return WIN_SCORE,
            GameStatus::Won(_) => return LOSS_SCORE,
            GameStatus::Drawn => return NEUTRAL_SCORE,
            GameStatus::NotStarted | GameStatus::InProgress => {}
        }

        if depth == 0 {
            return NEUTRAL_SCORE;
        }

        if let Some(limit) = self.node_limit {
            if self.nodes >= limit {
                self.truncated = true;
            }
        }
        if self.truncated {
            return NEUTRAL_SCORE;
        }

        let maximizing = mover == self.player;
        let mut best = if maximizing { -INFINITY } else { INFINITY };
        let mut expanded = false;

        for &column in &profile.move_order {
            if !board.is_column_open(column) {
                continue;
            }
            expanded = true;

            Self::play(board, column, mover);
            let score = self.minimax(board, profile, depth - 1, alpha, beta, mover.opponent());
            Self::retract(board);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if (profile.pruning && alpha >= beta) || self.truncated {
                break;
            }
        }

        assert!(expanded, "non-terminal position has no open column");
        best
    }

    /// Pick one column out of the search's best candidates.
    fn select(&mut self, board: &mut Board, profile: &SearchProfile, report: &SearchReport) -> usize {
        if profile.neutral_fallback && report.score == NEUTRAL_SCORE {
            let column = random_open_column(&mut self.rng, board);
            debug!(column, "neutral evaluation, playing a random column");
            return column;
        }

        let mut candidates = report.best_columns.clone();

        // Finish the game when a tied candidate wins outright
        let winning: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&column| Self::completes_four(board, column, self.player))
            .collect();
        if !winning.is_empty() {
            candidates = winning;
        }

        match profile.tie_break {
            TieBreak::Uniform => choose_column(&mut self.rng, &candidates),
            TieBreak::BlockThenCenter => {
                let opponent = self.player.opponent();
                let blocking: Vec<usize> = candidates
                    .iter()
                    .copied()
                    .filter(|&column| Self::completes_four(board, column, opponent))
                    .collect();
                let pool = if blocking.is_empty() { &candidates } else { &blocking };
                CENTER_ORDER
                    .iter()
                    .copied()
                    .find(|column| pool.contains(column))
                    .unwrap_or_else(|| panic!("no candidate move after search"))
            }
        }
    }

    /// Would `player` win immediately by dropping into `column`?
    fn completes_four(board: &mut Board, column: usize, player: Player) -> bool {
        if !board.is_column_open(column) {
            return false;
        }
        match board.drop_piece(column, player) {
            Ok(status) => {
                Self::retract(board);
                status == GameStatus::Won(player)
            }
            Err(_) => false,
        }
    }

    fn play(board: &mut Board, column: usize, player: Player) {
        if let Err(err) = board.drop_piece(column, player) {
            panic!("search played an illegal move in column {column}: {err}");
        }
    }

    fn retract(board: &mut Board) {
        let undone = board.undo_last_move();
        assert!(undone, "search tried to undo a move that was never played");
    }
}

impl Agent for SearchEngine {
    fn select_move(&mut self, board: &mut Board) -> usize {
        self.find_best_move(board)
    }

    fn name(&self) -> &str {
        self.strength.name()
    }

    fn new_game(&mut self, player: Player) {
        self.player = player;
        self.reset();
    }
}
