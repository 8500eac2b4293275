//! Configuration file management for milspot.
//!
//! Reads/writes `~/.milspot/config.yaml` with the catalog override path,
//! notifier settings, and the live-tracking link base.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::PatternCatalog;
use crate::types::{MilspotError, Result};

pub const DEFAULT_TRACKING_URL_BASE: &str = "https://www.flightradar24.com/";

/// Full configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// YAML pattern catalog replacing the built-in tables.
    pub catalog: Option<PathBuf>,
    pub notifier: NotifierConfig,
    pub tracking_url_base: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    pub webhook: Option<String>,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalog: None,
            notifier: NotifierConfig::default(),
            tracking_url_base: DEFAULT_TRACKING_URL_BASE.into(),
        }
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        NotifierConfig {
            webhook: None,
            timeout_secs: 10,
        }
    }
}

impl Config {
    /// Pattern catalog named by this config, or the built-in one.
    pub fn load_catalog(&self) -> Result<PatternCatalog> {
        match &self.catalog {
            Some(path) => PatternCatalog::load(path),
            None => Ok(PatternCatalog::builtin()),
        }
    }
}

/// Get the config directory path (`~/.milspot/`).
pub fn config_dir() -> PathBuf {
    dirs_home().join(".milspot")
}

/// Get the config file path.
pub fn config_file() -> PathBuf {
    config_dir().join("config.yaml")
}

fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Load config from `path`.
///
/// Returns default config if the file doesn't exist. A file that exists but
/// fails to parse is an error.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = std::fs::read_to_string(path)?;
    parse_config(&text)
}

/// Save config to `path`, creating parent directories.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let text = serialize_config(config)?;
    std::fs::write(path, text)?;
    Ok(())
}

fn parse_config(text: &str) -> Result<Config> {
    if text.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(text)?;
    if config.notifier.timeout_secs == 0 {
        return Err(MilspotError::Config(
            "notifier.timeout_secs must be at least 1".into(),
        ));
    }
    Ok(config)
}

fn serialize_config(config: &Config) -> Result<String> {
    let body = serde_yaml::to_string(config)?;
    Ok(format!("# milspot configuration\n\n{body}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
