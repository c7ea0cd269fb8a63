use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid color {value:?} for {player}")]
    InvalidColor { player: String, value: String },

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("player1.name must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: player1.name must not be empty"
        );
    }

    #[test]
    fn test_invalid_color_display() {
        let err = ConfigError::InvalidColor {
            player: "player2".to_string(),
            value: "mauve-ish".to_string(),
        };
        assert_eq!(err.to_string(), "invalid color \"mauve-ish\" for player2");
    }

    #[test]
    fn test_file_read_display() {
        let err = ConfigError::FileRead {
            path: PathBuf::from("missing.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read config file missing.toml: not found"
        );
    }
}
