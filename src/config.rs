//! Configuration module for Chirp

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{TweetError, TweetResult};
use crate::paths;

/// Environment variable that overrides [`Config::api_url`]
pub const API_URL_VAR: &str = "TWITTER_API_URL";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Twitter REST API (scheme + host, no trailing path)
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    "https://api.twitter.com".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> TweetResult<PathBuf> {
        paths::config_path().map_err(|e| TweetError::Config(e.to_string()))
    }

    /// Load config from the default path, then apply environment overrides
    pub fn load() -> TweetResult<Self> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Load config from the default path, then apply overrides from `lookup`
    pub fn load_with<F>(lookup: F) -> TweetResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = Self::default_path()?;
        Ok(Self::load_from(&path)?.with_overrides(lookup))
    }

    /// Load config from a specific path, falling back to defaults if it is absent
    pub fn load_from(path: &Path) -> TweetResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            TweetError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        toml::from_str(&content)
            .map_err(|e| TweetError::Config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> TweetResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TweetError::Config(format!("Failed to create config directory: {e}"))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| TweetError::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, content)
            .map_err(|e| TweetError::Config(format!("Failed to write config file: {e}")))
    }

    /// Apply `TWITTER_API_URL` through `lookup`; empty values are ignored
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_VAR).filter(|u| !u.is_empty()) {
            self.api_url = url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, "https://api.twitter.com");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            api_url: "http://127.0.0.1:8080".to_string(),
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_empty_file_uses_default_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        assert_eq!(Config::load_from(&path).unwrap().api_url, "https://api.twitter.com");
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_url = [").unwrap();

        assert!(matches!(Config::load_from(&path), Err(TweetError::Config(_))));
    }

    #[test]
    fn test_env_override() {
        let config = Config::default()
            .with_overrides(|name| (name == API_URL_VAR).then(|| "http://stub".to_string()));
        assert_eq!(config.api_url, "http://stub");

        let config = Config::default().with_overrides(|_| Some(String::new()));
        assert_eq!(config.api_url, "https://api.twitter.com");
    }
}
