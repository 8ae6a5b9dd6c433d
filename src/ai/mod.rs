mod agent;
mod random;
mod search;
mod strength;

pub use agent::Agent;
pub use random::RandomAgent;
pub use search::{SearchEngine, SearchReport, LOSS_SCORE, NEUTRAL_SCORE, WIN_SCORE};
pub use strength::{
    SearchProfile, Strength, TieBreak, CENTER_ORDER, HARD_DEPTH_STEEPNESS, HARD_MAX_DEPTH,
    MASTER_DEPTH,
};
