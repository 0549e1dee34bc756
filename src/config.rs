//! SecondBrain configuration management

use crate::error::{Error, Result};
use chrono::Offset;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main SecondBrain configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrainConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Dataset source configuration
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Dashboard display configuration
    #[serde(default)]
    pub display: DisplayConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Allowed CORS origins (empty = any origin)
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 18800,
            cors_origins: Vec::new(),
        }
    }
}

/// Dataset source configuration
///
/// When `path` is unset the bundled sample collection is served.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// JSON file holding an array of content items
    pub path: Option<PathBuf>,
}

/// Dashboard display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// UTC offset used for "today"/"yesterday" labels, in minutes
    pub utc_offset_minutes: i32,

    /// Number of tags shown in the sidebar
    pub popular_tag_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 8 * 60,
            popular_tag_limit: 5,
        }
    }
}

impl DisplayConfig {
    fn checked_offset(&self) -> Option<chrono::FixedOffset> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(chrono::FixedOffset::east_opt)
    }

    /// Reject offsets of a full day or more
    pub fn validate(&self) -> Result<()> {
        match self.checked_offset() {
            Some(_) => Ok(()),
            None => Err(Error::Config(format!(
                "display.utc_offset_minutes out of range: {}",
                self.utc_offset_minutes
            ))),
        }
    }

    /// Fixed offset for timestamp labels
    ///
    /// Loaded configs are validated; a hand-built out-of-range value maps to UTC.
    pub fn offset(&self) -> chrono::FixedOffset {
        self.checked_offset().unwrap_or_else(|| chrono::Utc.fix())
    }
}

impl BrainConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.display.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Resolve the effective configuration
    ///
    /// An explicit path must exist. Without one, `~/.secondbrain/config.toml`
    /// is used when present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            tracing::debug!("Loading config from {}", path.display());
            return Self::from_file(path);
        }

        let default_path = Self::default_path();
        if default_path.exists() {
            tracing::debug!("Loading config from {}", default_path.display());
            Self::from_file(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Default config location (~/.secondbrain/config.toml)
    pub fn default_path() -> PathBuf {
        dirs_next::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".secondbrain")
            .join("config.toml")
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }
}
