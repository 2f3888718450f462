//! Configuration management for Moodboard CLI
//!
//! Stores the server URL and a default nickname in ~/.config/moodboard/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "moodboard";
const CONFIG_FILE: &str = "config.toml";

/// Overrides `base_url` when set
pub const URL_ENV: &str = "MOODBOARD_URL";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            nickname: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Server URL, honouring the environment override
    pub fn server_url(&self) -> String {
        resolve_url(&self.base_url, std::env::var(URL_ENV).ok())
    }

    pub fn set_base_url(&mut self, url: String) {
        self.base_url = url.trim_end_matches('/').to_string();
    }

    /// Empty names clear the default
    pub fn set_nickname(&mut self, nickname: String) {
        let nickname = nickname.trim().to_string();
        self.nickname = (!nickname.is_empty()).then_some(nickname);
    }
}

fn resolve_url(configured: &str, env_override: Option<String>) -> String {
    env_override
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| configured.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());

        let config = Config::parse("nickname = \"ayse\"").unwrap();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.nickname.as_deref(), Some("ayse"));
    }

    #[test]
    fn test_env_override() {
        assert_eq!(resolve_url("http://a", None), "http://a");
        assert_eq!(resolve_url("http://a", Some("".into())), "http://a");
        assert_eq!(resolve_url("http://a", Some("http://b".into())), "http://b");
    }

    #[test]
    fn test_setters() {
        let mut config = Config::default();
        config.set_base_url("https://board.example.com/".into());
        assert_eq!(config.base_url, "https://board.example.com");

        config.set_nickname("  mehmet ".into());
        assert_eq!(config.nickname.as_deref(), Some("mehmet"));
        config.set_nickname(" ".into());
        assert_eq!(config.nickname, None);
    }
}
