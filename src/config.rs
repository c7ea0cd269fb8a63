use std::path::Path;

use ratatui::style::Color;
use tracing::warn;

use crate::error::ConfigError;
use crate::game::Player;

const MAX_NAME_LEN: usize = 24;

/// Display settings for one player.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    /// Any ratatui color string: a name such as `"red"` or hex `"#6ecf9c"`
    pub color: String,
}

impl PlayerConfig {
    fn defaults_for(player: Player) -> Self {
        let color = match player {
            Player::One => "red",
            Player::Two => "yellow",
        };
        PlayerConfig {
            name: player.default_name().to_string(),
            color: color.to_string(),
        }
    }

    /// Parsed terminal color.
    pub fn color(&self) -> Result<Color, ConfigError> {
        self.color
            .parse::<Color>()
            .map_err(|_| ConfigError::InvalidColor {
                player: self.name.clone(),
                value: self.color.clone(),
            })
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub player1: PlayerConfig,
    pub player2: PlayerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            player1: PlayerConfig::defaults_for(Player::One),
            player2: PlayerConfig::defaults_for(Player::Two),
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

    pub fn player(&self, player: Player) -> &PlayerConfig {
        match player {
            Player::One => &self.player1,
            Player::Two => &self.player2,
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, player) in [("player1", &self.player1), ("player2", &self.player2)] {
            let name = player.name.trim();
            if name.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{key}.name must not be empty"
                )));
            }
            if name.chars().count() > MAX_NAME_LEN {
                return Err(ConfigError::Validation(format!(
                    "{key}.name must be at most {MAX_NAME_LEN} characters"
                )));
            }
        }

        if self.player1.color()? == self.player2.color()? {
            return Err(ConfigError::Validation(
                "player1.color and player2.color must differ".into(),
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
