//! Configuration loading and management
//!
//! Handles parsing of `.prio.toml` files from the vault root.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Candidate file selection
    #[serde(default)]
    pub files: FilesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: FilesConfig::default(),
        }
    }
}

/// File selection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesConfig {
    /// File name prefix a candidate must carry
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// File extension of candidates, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_prefix() -> String {
    "ToDo".to_string()
}

fn default_extension() -> String {
    "md".to_string()
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            extension: default_extension(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a vault root, falling back to defaults when
    /// `.prio.toml` is absent or unreadable.
    pub fn load_from_vault(vault_root: &Path) -> Self {
        let config_path = vault_root.join(".prio.toml");
        if config_path.exists() {
            Self::load(&config_path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    fn validate(&self) -> Result<()> {
        if self.files.prefix.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "files.prefix cannot be empty".to_string(),
            ));
        }
        if self.files.extension.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "files.extension cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
