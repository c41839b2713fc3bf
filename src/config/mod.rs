//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! The file lives in the platform config directory (e.g.
//! `~/.config/LeafLoaf/settings.toml`) and every field is optional: a missing
//! or unparseable file falls back to defaults rather than failing startup.

mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "LeafLoaf";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preferred display language in BCP-47 form (e.g. `en-US`).
    pub language: Option<String>,
    /// Base URL of the backend project; overrides the built-in default.
    #[serde(default)]
    pub backend_url: Option<String>,
    /// Anon key for the backend project; overrides the built-in default.
    #[serde(default)]
    pub backend_anon_key: Option<String>,
}

impl Config {
    /// Backend base URL after applying the default.
    #[must_use]
    pub fn backend_url(&self) -> &str {
        self.backend_url.as_deref().unwrap_or(DEFAULT_BACKEND_URL)
    }

    /// Backend anon key after applying the default.
    #[must_use]
    pub fn backend_anon_key(&self) -> &str {
        self.backend_anon_key.as_deref().unwrap_or(DEFAULT_ANON_KEY)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).unwrap();
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            language: Some("en-US".to_string()),
            backend_url: Some("https://local.test".to_string()),
            backend_anon_key: Some("key-123".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.backend_url, config.backend_url);
        assert_eq!(loaded.backend_anon_key, config.backend_anon_key);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
        assert!(loaded.backend_url.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");
        let config = Config {
            language: Some("en-US".to_string()),
            ..Config::default()
        };

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn backend_accessors_fall_back_to_defaults() {
        let config = Config::default();
        assert_eq!(config.backend_url(), DEFAULT_BACKEND_URL);
        assert_eq!(config.backend_anon_key(), DEFAULT_ANON_KEY);

        let overridden = Config {
            backend_url: Some("https://local.test".to_string()),
            ..Config::default()
        };
        assert_eq!(overridden.backend_url(), "https://local.test");
    }
}
