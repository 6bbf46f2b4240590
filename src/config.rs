//! Configuration System
//!
//! TOML-backed configuration with a fixed lookup order: explicit path,
//! `CLAIMTREE_CONFIG` environment variable, XDG config directory, defaults.
//! A missing config file is not an error; a malformed one is.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClaimtreeConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration using the standard lookup order.
    pub fn load(explicit: Option<&Path>) -> Result<ClaimtreeConfig, ApiError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        if let Ok(env_path) = std::env::var("CLAIMTREE_CONFIG") {
            return Self::load_from_file(Path::new(&env_path));
        }
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }
        Ok(ClaimtreeConfig::default())
    }

    /// Load configuration from a specific TOML file.
    pub fn load_from_file(path: &Path) -> Result<ClaimtreeConfig, ApiError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ApiError::ConfigError(format!("Failed to read config {:?}: {}", path, e))
        })?;
        toml::from_str(&raw).map_err(|e| {
            ApiError::ConfigError(format!("Failed to parse config {:?}: {}", path, e))
        })
    }

    /// Default config location: `<XDG config dir>/claimtree/claimtree.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "claimtree").map(|dirs| dirs.config_dir().join("claimtree.toml"))
    }
}
