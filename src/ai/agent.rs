use crate::game::{Board, Player};

/// Universal interface for anything that picks moves: search engines,
/// random players, test doubles.
pub trait Agent {
    /// Select a column (1-indexed) to play on `board`.
    ///
    /// The board is borrowed mutably so that search can play and retract
    /// hypothetical moves in place; it must be returned unchanged.
    fn select_move(&mut self, board: &mut Board) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Prepare for a new game in which the agent plays `player`.
    fn new_game(&mut self, _player: Player) {}
}
