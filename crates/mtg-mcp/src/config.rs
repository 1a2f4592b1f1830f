//! Server configuration
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags. Every field has a default, so an empty file (or no
//! file at all) yields a working configuration.
//!
//! ```toml
//! data_root = "data"
//!
//! [scryfall]
//! base_url = "https://api.scryfall.com"
//! user_agent = "MTG-MCP-Server/1.0.0"
//! timeout_secs = 30
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use mtg_scryfall::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, ScryfallConfig};
use serde::Deserialize;

use crate::{Error, Result};

fn default_data_root() -> PathBuf {
    PathBuf::from("data")
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

/// `[scryfall]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScryfallSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout; the transport default applies when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ScryfallSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

impl ScryfallSection {
    pub fn client_config(&self) -> ScryfallConfig {
        ScryfallConfig {
            base_url: self.base_url.clone(),
            user_agent: self.user_agent.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Corpus root holding `index.txt`, `rules/` and `glossary/`
    #[serde(default = "default_data_root")]
    pub data_root: PathBuf,

    #[serde(default)]
    pub scryfall: ScryfallSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            scryfall: ScryfallSection::default(),
        }
    }
}

impl ServerConfig {
    /// Parse configuration from TOML content
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from `path` when given, otherwise start from defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
