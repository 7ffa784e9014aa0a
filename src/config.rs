//! Run configuration.
//!
//! A run is configured once at process start; the resulting [`Config`] is
//! passed by reference into every phase and nothing mutates it afterwards.
//!
//! ## Resolution Order
//!
//! 1. `$SHOEBOX_CONFIG` — explicit path to a TOML file
//! 2. `shoebox.toml` in the working directory
//! 3. Built-in defaults
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! source_root = "/media/<user>/disk"    # Card mount point
//! archive_root = "/home/<user>/archive" # Where the date buckets live
//!
//! [tokens]
//! photo = "jpg"       # Extension token per media kind
//! raw_photo = "arw"
//! video = "mp4"
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown
//! keys are rejected to catch typos early.

use crate::types::FileKind;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file path.
pub const CONFIG_ENV: &str = "SHOEBOX_CONFIG";

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "shoebox.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Immutable run configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Mount point of the removable media to ingest from.
    pub source_root: PathBuf,
    /// Archive directory the date buckets live under.
    pub archive_root: PathBuf,
    /// Extension tokens identifying each media kind.
    pub tokens: TokenConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            archive_root: default_archive_root(),
            tokens: TokenConfig::default(),
        }
    }
}

fn default_source_root() -> PathBuf {
    let user = env::var("USER").unwrap_or_else(|_| "card".into());
    PathBuf::from(format!("/media/{user}/disk"))
}

fn default_archive_root() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    Path::new(&home).join("archive")
}

/// Extension tokens for the recognized media kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TokenConfig {
    pub photo: String,
    pub raw_photo: String,
    pub video: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            photo: "jpg".into(),
            raw_photo: "arw".into(),
            video: "mp4".into(),
        }
    }
}

impl Config {
    /// The extension token a kind is discovered by.
    pub fn token(&self, kind: FileKind) -> &str {
        match kind {
            FileKind::Photo => &self.tokens.photo,
            FileKind::RawPhoto => &self.tokens.raw_photo,
            FileKind::Video => &self.tokens.video,
        }
    }

    /// Load configuration using the resolution order in the [module docs](self).
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return Self::load_from(Path::new(&path));
        }
        let local = Path::new(CONFIG_FILE);
        if local.exists() {
            return Self::load_from(local);
        }
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a specific TOML file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_root.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "source_root must not be empty".into(),
            ));
        }
        if self.archive_root.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "archive_root must not be empty".into(),
            ));
        }
        for kind in FileKind::ALL {
            if self.token(kind).is_empty() {
                return Err(ConfigError::Validation(format!(
                    "token for {} must not be empty",
                    kind.dir_name()
                )));
            }
        }
        Ok(())
    }
}
