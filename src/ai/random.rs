use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;
use crate::game::Board;

/// Pick uniformly from `columns`. Panics on an empty slice.
pub(crate) fn choose_column<R: Rng + ?Sized>(rng: &mut R, columns: &[usize]) -> usize {
    assert!(!columns.is_empty(), "No columns to choose from");
    columns[rng.random_range(0..columns.len())]
}

/// Pick uniformly among the open columns of `board`.
pub(crate) fn random_open_column<R: Rng + ?Sized>(rng: &mut R, board: &Board) -> usize {
    choose_column(rng, &board.open_columns())
}

/// An agent that selects uniformly at random from open columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &mut Board) -> usize {
        random_open_column(&mut self.rng, board)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
