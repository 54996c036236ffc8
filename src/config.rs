//! Settings loaded from `othello.json`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::board::Color;
use crate::strategies::Difficulty;

/// Default settings file, looked up in the working directory
pub const CONFIG_FILE: &str = "othello.json";
/// Environment variable overriding the settings file location
pub const CONFIG_ENV: &str = "OTHELLO_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeSetting {
    #[default]
    Pve,
    Pvp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mode: ModeSetting,
    /// Color played by the human in PvE
    pub human_color: Color,
    pub difficulty: Difficulty,
    pub show_valid_moves: bool,
    pub show_debug: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: ModeSetting::Pve,
            human_color: Color::Black,
            difficulty: Difficulty::Medium,
            show_valid_moves: true,
            show_debug: true,
            window_width: 900.0,
            window_height: 680.0,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()
    }

    /// Load from `$OTHELLO_CONFIG` or `othello.json`, falling back to defaults
    pub fn load_or_default() -> Self {
        let path = Self::path();
        if !path.exists() {
            log::debug!("no settings file at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(&path) {
            Ok(settings) => {
                log::info!("loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("ignoring {}: {err:#}", path.display());
                Self::default()
            }
        }
    }

    pub fn path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    fn validate(self) -> anyhow::Result<Self> {
        if self.human_color == Color::None {
            anyhow::bail!("human_color must be \"black\" or \"white\"");
        }
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            anyhow::bail!("window size must be positive");
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_use_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"difficulty":"hard","human_color":"white"}"#).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.human_color, Color::White);
        assert_eq!(settings.mode, ModeSetting::Pve);
        assert!(settings.show_valid_moves);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("othello-settings-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"mode":"pvp","show_debug":false}"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.mode, ModeSetting::Pvp);
        assert!(!settings.show_debug);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let path = std::env::temp_dir().join(format!("othello-bad-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"human_color":"none"}"#).unwrap();

        let result = Settings::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(Settings::load(Path::new("/nonexistent/othello.json")).is_err());
    }
}
