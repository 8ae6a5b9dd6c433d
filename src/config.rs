use std::path::Path;

use tracing::warn;

use crate::ai::{SearchEngine, Strength};
use crate::error::ConfigError;
use crate::game::Player;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub game: GameConfig,
}

/// Settings for the computer opponent.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub strength: Strength,
    /// Seed for tie-breaking and the random tier; omitted means OS entropy.
    pub seed: Option<u64>,
    /// Maximum nodes per search; omitted means search to completion.
    pub node_limit: Option<u64>,
}

impl EngineConfig {
    /// Build an engine playing `player` with these settings.
    pub fn build(&self, player: Player) -> SearchEngine {
        let engine = match self.seed {
            Some(seed) => SearchEngine::with_seed(player, self.strength, seed),
            None => SearchEngine::new(player, self.strength),
        };
        engine.with_node_limit(self.node_limit)
    }
}

/// Settings for the interactive game.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Colour played by the human. Red moves first.
    pub human_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            human_player: Player::Red,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.node_limit == Some(0) {
            return Err(ConfigError::Validation(
                "engine.node_limit must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
