use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::FolioError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub appearance: AppearanceConfig,
    pub window: WindowConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

/// Configured appearance mode. `System` follows the OS preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceConfig {
    pub mode: ThemeMode,
    pub force_light_on_start: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
    pub file: bool,
}

impl AppConfig {
    /// Load config: the user file if it exists, otherwise the built-in defaults.
    pub fn load() -> Result<Self, FolioError> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, FolioError> {
        if path.exists() {
            let user_str = std::fs::read_to_string(path)?;
            toml::from_str(&user_str).map_err(|e| FolioError::Config(e.to_string()))
        } else {
            toml::from_str(DEFAULT_CONFIG).map_err(|e| FolioError::Config(e.to_string()))
        }
    }

    /// Save current config to the user config file.
    pub fn save(&self) -> Result<(), FolioError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), FolioError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| FolioError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Directory for rolling log files.
    pub fn log_dir() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.data_dir().join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs"))
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "folio")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AppConfig::default();
        assert_eq!(config.appearance.mode, ThemeMode::Light);
        assert!(config.appearance.force_light_on_start);
        assert!(config.catalog.path.is_none());
        assert_eq!(config.logging.filter, "folio=info");
        assert!(!config.logging.file);
    }

    #[test]
    fn test_roundtrip() {
        let mut config = AppConfig::default();
        config.appearance.mode = ThemeMode::System;
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.appearance.mode, ThemeMode::System);
        assert_eq!(deserialized.window.height, config.window.height);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        assert!(config.appearance.force_light_on_start);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.appearance.force_light_on_start = false;
        config.appearance.mode = ThemeMode::Dark;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert!(!loaded.appearance.force_light_on_start);
        assert_eq!(loaded.appearance.mode, ThemeMode::Dark);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "appearance = 3").unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(FolioError::Config(_))
        ));
    }
}
