//! Configuration management for Cardemy.
//!
//! Loads configuration from ${CARDEMY_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::lesson::LearnMode;

/// Default endpoint of the lesson-generation server.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000/api/generate-lesson";

/// Environment variable that overrides `server_url` from the config file.
pub const SERVER_URL_ENV: &str = "CARDEMY_SERVER_URL";

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `CARDEMY_LOG`/`RUST_LOG` are unset.
    pub level: String,
    /// Write logs to a rolling file under the Cardemy home directory.
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: false,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Endpoint that receives `{topic, learnMode}` and returns a deck.
    pub server_url: String,
    /// Mode preselected when the chat starts.
    pub default_mode: LearnMode,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            default_mode: LearnMode::Revision,
            request_timeout_secs: 60,
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Loads the config from disk, falling back to defaults when the file is
    /// absent. `CARDEMY_SERVER_URL` takes precedence over the file value.
    ///
    /// # Errors
    /// Returns an error if an existing config file cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = paths::config_path();
        let mut config = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            Self::from_toml(&content)
                .with_context(|| format!("Failed to parse config: {}", path.display()))?
        } else {
            Self::default()
        };

        if let Ok(url) = std::env::var(SERVER_URL_ENV) {
            let trimmed = url.trim();
            if !trimmed.is_empty() {
                config.server_url = trimmed.to_string();
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Parses a config from TOML. Missing keys take their defaults.
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid config TOML")
    }

    /// Validates cross-field constraints that serde cannot express.
    fn validate(&self) -> Result<()> {
        url::Url::parse(&self.server_url)
            .with_context(|| format!("Invalid server URL: {}", self.server_url))?;
        Ok(())
    }

    /// Replaces the server URL after validating it (CLI `--server-url`).
    ///
    /// # Errors
    /// Returns an error if `url` is not a valid URL.
    pub fn set_server_url(&mut self, url: &str) -> Result<()> {
        let trimmed = url.trim();
        url::Url::parse(trimmed).with_context(|| format!("Invalid server URL: {trimmed}"))?;
        self.server_url = trimmed.to_string();
        Ok(())
    }

    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time; written verbatim by
/// `cardemy config init`.
pub fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Writes the default config template to the config path if absent.
///
/// Returns true if a new file was written, false if one already existed.
///
/// # Errors
/// Returns an error if the directory or file cannot be created.
pub fn init_config_file() -> Result<bool> {
    let path = paths::config_path();
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir: {}", parent.display()))?;
    }
    fs::write(&path, default_config_template())
        .with_context(|| format!("Failed to write config: {}", path.display()))?;
    Ok(true)
}

/// Well-known filesystem locations.
pub mod paths {
    use std::path::PathBuf;

    /// Root directory for Cardemy state (`$CARDEMY_HOME`, default `~/.cardemy`).
    pub fn cardemy_home() -> PathBuf {
        if let Ok(home) = std::env::var("CARDEMY_HOME") {
            let trimmed = home.trim();
            if !trimmed.is_empty() {
                return PathBuf::from(trimmed);
            }
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".cardemy")
    }

    /// Path to the config file.
    pub fn config_path() -> PathBuf {
        cardemy_home().join("config.toml")
    }

    /// Directory for rolling log files.
    pub fn log_dir() -> PathBuf {
        cardemy_home().join("logs")
    }

    /// The user's home directory, if known.
    pub fn home_dir() -> Option<PathBuf> {
        std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()
            .map(PathBuf::from)
    }
}

/// Validates a fully formed config file path (used by `config path`).
pub fn config_path_display() -> String {
    paths::config_path().display().to_string()
}
