// src/config.rs

//! Manages bridge configuration: loading, defaults, and validation.

use crate::core::options::table::CONFIG_FILE_NAME;
use crate::core::protocol::MAX_PAYLOAD_LEN;
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// The bridge configuration, read from a TOML file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Initial log filter, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Where the option table is persisted.
    #[serde(default = "default_options_path")]
    pub options_path: PathBuf,
    /// Game tick period in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Longest accepted inbound payload, in bytes.
    #[serde(default = "default_max_payload_len")]
    pub max_payload_len: usize,
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_options_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAME)
}
fn default_tick_interval_ms() -> u64 {
    50
}
fn default_max_payload_len() -> usize {
    MAX_PAYLOAD_LEN
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            options_path: default_options_path(),
            tick_interval_ms: default_tick_interval_ms(),
            max_payload_len: default_max_payload_len(),
        }
    }
}

impl Config {
    /// Creates a new `Config` instance by reading and parsing a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at '{}'", path.display()))?;
        let config = Self::from_toml(&contents)
            .with_context(|| format!("Invalid config file '{}'", path.display()))?;
        info!("Loaded configuration from '{}'", path.display());
        Ok(config)
    }

    /// Like `from_file`, but a missing file yields the defaults.
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(
                "Config file '{}' not found, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration to ensure logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(anyhow!("tick_interval_ms cannot be 0"));
        }
        if self.max_payload_len == 0 {
            return Err(anyhow!("max_payload_len cannot be 0"));
        }
        if self.log_level.trim().is_empty() {
            return Err(anyhow!("log_level cannot be empty"));
        }
        if self.max_payload_len > MAX_PAYLOAD_LEN {
            warn!(
                "max_payload_len {} exceeds the protocol limit of {} bytes",
                self.max_payload_len, MAX_PAYLOAD_LEN
            );
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
