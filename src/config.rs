//! Game configuration
//!
//! Optional RON file next to the executable's working directory. Every
//! field has a default, so a missing file (or a file listing only some
//! fields) is fine:
//!
//! ```ron
//! (
//!     logo_path: "assets/logo.png",
//!     font_path: Some("assets/fonts/arial.ttf"),
//!     seed: Some(1234),
//!     skip_intro: false,
//! )
//! ```

use std::path::Path;
use serde::{Deserialize, Serialize};

/// Where the game looks for its config file
pub const CONFIG_PATH: &str = "maze.ron";

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {path}: {message}")]
    Parse { path: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Image shown spinning on the intro screen
    pub logo_path: String,
    /// TTF font for all text; macroquad's built-in font when unset
    pub font_path: Option<String>,
    /// Fixed RNG seed for reproducible layouts; clock-seeded when unset
    pub seed: Option<u64>,
    /// Go straight to the maze
    pub skip_intro: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            logo_path: "assets/logo.png".to_string(),
            font_path: None,
            seed: None,
            skip_intro: false,
        }
    }
}

impl GameConfig {
    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No {} found, using default settings", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        ron::from_str(contents).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(dir.path().join("maze.ron")).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.logo_path, "assets/logo.png");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maze.ron");
        fs::write(&path, "(seed: Some(99), skip_intro: true)").unwrap();

        let config = GameConfig::load_or_default(&path).unwrap();
        assert_eq!(config.seed, Some(99));
        assert!(config.skip_intro);
        assert_eq!(config.logo_path, "assets/logo.png");
        assert_eq!(config.font_path, None);
    }

    #[test]
    fn test_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maze.ron");
        let written = GameConfig {
            logo_path: "art/cube.png".to_string(),
            font_path: Some("art/font.ttf".to_string()),
            seed: Some(7),
            skip_intro: false,
        };
        fs::write(&path, ron::ser::to_string_pretty(&written, Default::default()).unwrap()).unwrap();

        assert_eq!(GameConfig::load_or_default(&path).unwrap(), written);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maze.ron");
        fs::write(&path, "(seed: \"not a number\"").unwrap();

        let err = GameConfig::load_or_default(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("maze.ron"));
    }

    #[test]
    fn test_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::load_or_default(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
