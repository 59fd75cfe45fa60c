//! Configuration management for todoterm
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_API_BASE_URL_ENV, DEFAULT_DATETIME_FORMAT, DEFAULT_SUPABASE_ANON_KEY_ENV,
    DEFAULT_SUPABASE_URL_ENV,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub supabase: SupabaseConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// REST backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the todo backend, used when the environment variable is unset
    pub base_url: Option<String>,
    /// Environment variable that overrides `base_url`
    pub base_url_env: String,
}

/// Third-party client credentials, read from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SupabaseConfig {
    pub url_env: String,
    pub anon_key_env: String,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the creation timestamp under each todo
    pub show_created_at: bool,
    /// chrono format for creation timestamps, rendered in local time
    pub datetime_format: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Mirror logs into a file
    pub enabled: bool,
    /// Minimum level for file output: error, warn, info, debug or trace
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            base_url_env: DEFAULT_API_BASE_URL_ENV.to_string(),
        }
    }
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url_env: DEFAULT_SUPABASE_URL_ENV.to_string(),
            anon_key_env: DEFAULT_SUPABASE_ANON_KEY_ENV.to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_created_at: true,
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl ApiConfig {
    /// Resolve the base URL: the environment variable wins over the file value
    pub fn resolve_base_url(&self) -> Result<String> {
        let from_env = std::env::var(&self.base_url_env).ok();
        Self::pick_base_url(from_env, self.base_url.clone())
            .ok_or_else(|| anyhow::anyhow!("API base URL not configured (set {})", self.base_url_env))
    }

    fn pick_base_url(from_env: Option<String>, from_file: Option<String>) -> Option<String> {
        from_env
            .into_iter()
            .chain(from_file)
            .map(|url| url.trim().to_string())
            .find(|url| !url.is_empty())
    }
}

impl SupabaseConfig {
    /// Read the (url, anon key) pair from the environment
    pub fn credentials_from_env(&self) -> (Option<String>, Option<String>) {
        (std::env::var(&self.url_env).ok(), std::env::var(&self.anon_key_env).ok())
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("todoterm.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        // No home/config dir is not an error: fall back to defaults
        if let Ok(xdg_config) = Self::get_default_config_path() {
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url_env.is_empty() {
            anyhow::bail!("api.base_url_env cannot be empty");
        }

        if let Some(url) = &self.api.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                anyhow::bail!("api.base_url must start with http:// or https://, got '{}'", url);
            }
        }

        if self.supabase.url_env.is_empty() || self.supabase.anon_key_env.is_empty() {
            anyhow::bail!("supabase environment variable names cannot be empty");
        }

        // chrono panics when formatting with a bad specifier, so catch it here
        if chrono::format::StrftimeItems::new(&self.display.datetime_format)
            .any(|item| matches!(item, chrono::format::Item::Error))
        {
            anyhow::bail!("Invalid datetime_format '{}'", self.display.datetime_format);
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# todoterm Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("todoterm"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_value_wins_over_file_value() {
        let picked = ApiConfig::pick_base_url(
            Some("http://env:8000".to_string()),
            Some("http://file:8000".to_string()),
        );
        assert_eq!(picked.as_deref(), Some("http://env:8000"));
    }

    #[test]
    fn blank_env_value_falls_back_to_file() {
        let picked = ApiConfig::pick_base_url(Some("  ".to_string()), Some("http://file:8000".to_string()));
        assert_eq!(picked.as_deref(), Some("http://file:8000"));
    }

    #[test]
    fn default_config_path_is_under_app_dir() {
        if let Ok(path) = Config::get_default_config_path() {
            assert!(path.ends_with("todoterm/config.toml"));
            assert_eq!(path.parent(), Config::get_xdg_config_dir().ok().as_deref());
        }
    }

    #[test]
    fn nothing_configured() {
        assert!(ApiConfig::pick_base_url(None, None).is_none());
    }
}
