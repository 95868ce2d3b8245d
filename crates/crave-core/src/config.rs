use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::api::{DEFAULT_BASE_URL, DEFAULT_QUERY};
use crate::cook::DEFAULT_TIMER_PRESETS;
use crate::error::{Error, Result};

/// Overrides `api_base_url` when set
pub const API_URL_ENV: &str = "CRAVE_API_URL";

const APP_DIR: &str = "crave";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub api_base_url: Option<String>,
    pub default_query: Option<String>,
    pub favorites_path: Option<PathBuf>,
    /// Cook-mode timer buttons, in minutes
    pub timer_presets: Option<Vec<u64>>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let config_content = fs::read_to_string(config_path)?;
        serde_json::from_str(&config_content).map_err(|e| Error::ConfigInvalid {
            path: config_path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config_content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, config_content)?;
        Ok(())
    }

    /// Base URL after applying the environment override
    pub fn api_base_url(&self) -> String {
        std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn default_query(&self) -> &str {
        self.default_query.as_deref().unwrap_or(DEFAULT_QUERY)
    }

    pub fn timer_presets(&self) -> Vec<u64> {
        match &self.timer_presets {
            Some(presets) if !presets.is_empty() => presets.clone(),
            _ => DEFAULT_TIMER_PRESETS.to_vec(),
        }
    }

    pub fn favorites_path(&self) -> Result<PathBuf> {
        match &self.favorites_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("favorites.json")),
        }
    }

    fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(Error::NoDirectory { what: "config" })?;
        Ok(config_dir.join(APP_DIR))
    }

    pub fn get_config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::new());
        assert_eq!(config.default_query(), "chicken");
        assert_eq!(config.timer_presets(), vec![5, 10]);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sub").join("config.json");
        let config = Config {
            api_base_url: Some("http://localhost:8080".to_string()),
            default_query: Some("soup".to_string()),
            favorites_path: Some(dir.path().join("favs.json")),
            timer_presets: Some(vec![1, 3, 15]),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.favorites_path().unwrap(), dir.path().join("favs.json"));
        assert_eq!(loaded.timer_presets(), vec![1, 3, 15]);
    }

    #[test]
    fn test_empty_presets_fall_back() {
        let config = Config {
            timer_presets: Some(Vec::new()),
            ..Config::default()
        };
        assert_eq!(config.timer_presets(), vec![5, 10]);
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"default_query": "pie"}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_query(), "pie");
        assert!(config.api_base_url.is_none());
    }
}
