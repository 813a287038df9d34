//! Startup errors
//!
//! Nothing inside a running round can fail; everything that can goes wrong
//! before the first tick and ends the program.

use crate::config::ConfigError;

#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An image or font could not be loaded
    #[error("failed to load {path}: {reason}")]
    Asset { path: String, reason: String },
}

impl GameError {
    pub fn asset(path: &str, reason: impl ToString) -> Self {
        GameError::Asset {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_names_the_file() {
        let err = GameError::asset("assets/logo.png", "No such file or directory");
        assert_eq!(
            err.to_string(),
            "failed to load assets/logo.png: No such file or directory"
        );
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err: GameError = ConfigError::Parse {
            path: "maze.ron".to_string(),
            message: "1:1: Expected opening `(`".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "cannot parse maze.ron: 1:1: Expected opening `(`");
    }
}
