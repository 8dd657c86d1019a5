use std::path::Path;

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub engine: EngineConfig,
    pub display: DisplayConfig,
}

/// Who drops the first piece of a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstMove {
    #[default]
    Random,
    Human,
    Ai,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub first_move: FirstMove,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How many plies the engine looks ahead.
    pub search_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig { search_depth: 4 }
    }
}

/// Glyphs used to draw the grid.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub human: String,
    pub ai: String,
    pub empty: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            human: "●".to_string(),
            ai: "●".to_string(),
            empty: ".".to_string(),
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

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.search_depth == 0 {
            return Err(ConfigError::Validation(
                "engine.search_depth must be >= 1".into(),
            ));
        }
        if self.display.human.is_empty() {
            return Err(ConfigError::Validation(
                "display.human must not be empty".into(),
            ));
        }
        if self.display.ai.is_empty() {
            return Err(ConfigError::Validation(
                "display.ai must not be empty".into(),
            ));
        }
        if self.display.empty.is_empty() {
            return Err(ConfigError::Validation(
                "display.empty must not be empty".into(),
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
