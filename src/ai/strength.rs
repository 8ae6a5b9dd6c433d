use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseStrengthError;
use crate::game::COLS;

/// Depth cap of the hard tier's logistic depth curve.
pub const HARD_MAX_DEPTH: u32 = 10;
/// Steepness `k` of the hard tier's logistic depth curve.
pub const HARD_DEPTH_STEEPNESS: f64 = 0.2;
/// Enough plies to reach the end of the game from any reply to the opening.
pub const MASTER_DEPTH: u32 = 41;

/// Column ordering: center-first for better alpha-beta pruning.
pub const CENTER_ORDER: [usize; COLS] = [4, 3, 5, 2, 6, 1, 7];
const LEFT_TO_RIGHT: [usize; COLS] = [1, 2, 3, 4, 5, 6, 7];

/// Difficulty tier of the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Random,
    Easy,
    Medium,
    #[default]
    Hard,
    Master,
}

/// How a tier picks among columns that share the best score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Uniformly random among the tied columns.
    Uniform,
    /// Prefer a column that blocks an immediate opponent win, then the most
    /// central one.
    BlockThenCenter,
}

/// Search parameters of one tier at one point in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProfile {
    pub depth: u32,
    pub pruning: bool,
    pub move_order: [usize; COLS],
    pub tie_break: TieBreak,
    /// Play a random column whenever the search sees nothing but draws.
    pub neutral_fallback: bool,
}

impl Strength {
    pub const ALL: [Strength; 5] = [
        Strength::Random,
        Strength::Easy,
        Strength::Medium,
        Strength::Hard,
        Strength::Master,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strength::Random => "random",
            Strength::Easy => "easy",
            Strength::Medium => "medium",
            Strength::Hard => "hard",
            Strength::Master => "master",
        }
    }

    /// Search parameters for the engine's `move_count`-th move, or `None`
    /// for the random tier, which does not search.
    pub fn profile(self, move_count: u32) -> Option<SearchProfile> {
        let profile = match self {
            Strength::Random => return None,
            Strength::Easy => SearchProfile {
                depth: 3,
                pruning: false,
                move_order: LEFT_TO_RIGHT,
                tie_break: TieBreak::Uniform,
                neutral_fallback: false,
            },
            Strength::Medium => SearchProfile {
                depth: 5,
                pruning: false,
                move_order: LEFT_TO_RIGHT,
                tie_break: TieBreak::Uniform,
                neutral_fallback: true,
            },
            Strength::Hard => SearchProfile {
                depth: Self::hard_depth(move_count),
                pruning: true,
                move_order: CENTER_ORDER,
                tie_break: TieBreak::BlockThenCenter,
                neutral_fallback: false,
            },
            Strength::Master => SearchProfile {
                depth: MASTER_DEPTH,
                pruning: true,
                move_order: CENTER_ORDER,
                tie_break: TieBreak::Uniform,
                neutral_fallback: false,
            },
        };
        Some(profile)
    }

    /// `floor(max_depth / (1 + e^(-k * move_count)))`: half depth on the
    /// first move, approaching the cap as the game goes on.
    pub fn hard_depth(move_count: u32) -> u32 {
        let scale = 1.0 + (-HARD_DEPTH_STEEPNESS * f64::from(move_count)).exp();
        (f64::from(HARD_MAX_DEPTH) / scale).floor() as u32
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strength {
    type Err = ParseStrengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Strength::ALL
            .into_iter()
            .find(|strength| strength.name() == wanted)
            .ok_or_else(|| ParseStrengthError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_depth_curve() {
        assert_eq!(Strength::hard_depth(0), 5);
        assert_eq!(Strength::hard_depth(5), 7);
        assert_eq!(Strength::hard_depth(10), 8);
        assert_eq!(Strength::hard_depth(100), 9);
    }

    #[test]
    fn test_hard_depth_is_monotonic_and_capped() {
        let mut previous = 0;
        for move_count in 0..60 {
            let depth = Strength::hard_depth(move_count);
            assert!(depth >= previous, "depth shrank at move {move_count}");
            assert!(depth < HARD_MAX_DEPTH);
            previous = depth;
        }
    }

    #[test]
    fn test_profiles() {
        assert_eq!(Strength::Random.profile(0), None);

        let easy = Strength::Easy.profile(0).unwrap();
        assert_eq!(easy.depth, 3);
        assert!(!easy.pruning);

        let medium = Strength::Medium.profile(0).unwrap();
        assert_eq!(medium.depth, 5);
        assert!(medium.neutral_fallback);

        let hard = Strength::Hard.profile(10).unwrap();
        assert_eq!(hard.depth, 8);
        assert_eq!(hard.tie_break, TieBreak::BlockThenCenter);
        assert_eq!(hard.move_order[0], 4);

        let master = Strength::Master.profile(0).unwrap();
        assert_eq!(master.depth, MASTER_DEPTH);
        assert!(master.pruning);
    }

    #[test]
    fn test_parse_strength() {
        assert_eq!("hard".parse::<Strength>(), Ok(Strength::Hard));
        assert_eq!(" Master ".parse::<Strength>(), Ok(Strength::Master));
        assert!("grandmaster".parse::<Strength>().is_err());
        for strength in Strength::ALL {
            assert_eq!(strength.to_string().parse::<Strength>(), Ok(strength));
        }
    }

    #[test]
    fn test_strength_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            strength: Strength,
        }
        let parsed: Wrapper = toml::from_str("strength = \"medium\"").unwrap();
        assert_eq!(parsed.strength, Strength::Medium);
    }
}
