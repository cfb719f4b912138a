//! Configuration management
//!
//! Selects the extraction backend, the locale stamped on decisions and
//! where records are stored. Config is read from
//! `~/.config/pawnkyc/config.toml` (XDG standard) unless a path is given.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::ports::ExtractorKind;

/// Application directory name under the user config/data dirs
const APP_DIR: &str = "pawnkyc";
/// Config filename
const CONFIG_FILE: &str = "config.toml";
/// Records subdirectory
const RECORDS_DIR: &str = "records";

/// Errors loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read or written
    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// pawnkyc configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycConfig {
    /// Extraction backend selection
    #[serde(default)]
    pub extractor: ExtractorConfig,
    /// Engine settings
    #[serde(default)]
    pub engine: EngineConfig,
    /// Record storage
    #[serde(default)]
    pub store: StoreConfig,
}

/// Extraction backend selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Backend: "mock" or "mrz"
    #[serde(default)]
    pub backend: ExtractorKind,
}

/// Engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// UI locale stamped onto decisions
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
        }
    }
}

/// Record storage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding JSON KYC records
    #[serde(default = "default_store_dir")]
    pub dir: PathBuf,
}

fn default_store_dir() -> PathBuf {
    dirs::data_dir()
        .map_or_else(|| PathBuf::from(".pawnkyc"), |d| d.join(APP_DIR))
        .join(RECORDS_DIR)
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: default_store_dir(),
        }
    }
}

impl KycConfig {
    /// Default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map_or_else(|| PathBuf::from(".pawnkyc"), |d| d.join(APP_DIR))
            .join(CONFIG_FILE)
    }

    /// Load from `path`, or from the default location when `None`
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map_or_else(Self::config_path, Path::to_path_buf);
        Self::load_from(&path)
    }

    /// Load from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
