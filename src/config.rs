//! CLI configuration file support
//!
//! Optional defaults read from `<config_dir>/cswpub/config.toml`, or from
//! the path named by `CSWPUB_CONFIG`. Command-line flags override file
//! values; built-in defaults apply last.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

/// Default resource type for harvest requests: Dublin Core records
pub const DEFAULT_RESOURCE_TYPE: &str = "http://www.opengis.net/cat/csw/2.0.2";

/// Environment variable overriding the config file location
pub const CONFIG_PATH_VAR: &str = "CSWPUB_CONFIG";

/// Defaults loaded from the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    /// Default catalog endpoint URL
    pub endpoint: Option<String>,
    /// Default resource type for harvest requests
    pub resource_type: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Load the config file if one exists.
    ///
    /// A path given via `CSWPUB_CONFIG` must load; the default location is
    /// optional and an absent file yields empty defaults.
    pub fn load() -> Result<Self> {
        if let Ok(path) = env::var(CONFIG_PATH_VAR) {
            return Self::load_from(Path::new(&path));
        }

        match default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&raw)
            .map_err(|e| Error::Config(format!("invalid config file {}: {e}", path.display())))
    }
}

/// Default config file location: `<config_dir>/cswpub/config.toml`
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cswpub").join("config.toml"))
}
