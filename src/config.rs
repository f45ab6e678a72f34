//! Matcher configuration files
//!
//! A `respath.toml` holds walk options and the matchers a walk applies:
//!
//! ```toml
//! [walk]
//! include_hidden = false
//! max_depth = 8
//!
//! [[matchers]]
//! kind = "file"
//!
//! [[matchers]]
//! kind = "pattern"
//! pattern = "src/**/*.rs"
//! ```
//!
//! Matchers are compiled while the file is parsed, so a bad glob or regex is
//! reported as a config error rather than at walk time.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::PathMatcher;

/// Config filename looked up in a walk root
pub const CONFIG_FILE: &str = "respath.toml";

/// Errors that can occur when loading or saving a config
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read or written
    #[error("failed to access config at {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or contains a bad matcher
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Config could not be serialized
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Walk options and matchers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Traversal options
    #[serde(default)]
    pub walk: WalkConfig,
    /// Matchers every reported path must satisfy
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matchers: Vec<PathMatcher>,
}

/// Traversal options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Follow symbolic links
    #[serde(default = "default_follow_links")]
    pub follow_links: bool,
    /// Include entries whose name starts with `.`
    #[serde(default)]
    pub include_hidden: bool,
    /// Maximum depth below the root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

const fn default_follow_links() -> bool {
    true
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            follow_links: default_follow_links(),
            include_hidden: false,
            max_depth: None,
        }
    }
}

impl Config {
    /// Parse a config from TOML text
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from disk, or the default if the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content, path)?;
        debug!("loaded {} matcher(s) from {}", config.matchers.len(), path.display());
        Ok(config)
    }

    /// Load `respath.toml` from a directory
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        Self::load(&dir.join(CONFIG_FILE))
    }

    /// Save config to disk
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
