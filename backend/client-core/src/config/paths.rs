//! Platform-aware detection of Parley's directories.
//!
//! Lookup order:
//! 1. `PARLEY_DATA_DIR` environment variable (config, data and logs all live there)
//! 2. Platform-specific directories via `dirs`
//! 3. `$HOME/.local/share/parley` fallback
//!
//! Returns Result, never silently falls back to a relative path.

use crate::error::ConfigError;

use common::ErrorLocation;

use std::env;
use std::panic::Location;
use std::path::PathBuf;

use log::{debug, info, warn};

pub const DATA_DIR_ENV_VAR: &str = "PARLEY_DATA_DIR";
const APP_DIR_NAME: &str = "parley";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParleyPaths {
    /// Holds the key-value store file.
    pub data_dir: PathBuf,
    /// Holds `config.json`.
    pub config_dir: PathBuf,
    /// Holds `parley.log`.
    pub log_dir: PathBuf,
    pub source: PathSource,
}

/// How the paths were determined (for logging).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    /// `--config-dir` on the command line.
    CommandLine,
    EnvVar,
    PlatformDefault,
    HomeFallback,
}

impl std::fmt::Display for PathSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSource::CommandLine => write!(f, "command line"),
            PathSource::EnvVar => write!(f, "{DATA_DIR_ENV_VAR}"),
            PathSource::PlatformDefault => write!(f, "platform default"),
            PathSource::HomeFallback => write!(f, "home fallback"),
        }
    }
}

impl ParleyPaths {
    /// All three directories rooted at `dir`.
    pub fn rooted_at(dir: impl Into<PathBuf>, source: PathSource) -> Self {
        let dir = dir.into();
        Self {
            data_dir: dir.clone(),
            config_dir: dir.clone(),
            log_dir: dir,
            source,
        }
    }

    /// Detect paths for this platform.
    ///
    /// # Errors
    /// Returns [`ConfigError::DirectoryNotFound`] if no directory can be determined.
    pub fn detect() -> Result<Self, ConfigError> {
        if let Some(custom_dir) = env::var_os(DATA_DIR_ENV_VAR).filter(|v| !v.is_empty()) {
            let paths = Self::rooted_at(custom_dir, PathSource::EnvVar);
            info!("Using {DATA_DIR_ENV_VAR} override: {}", paths.data_dir.display());
            return Ok(paths);
        }

        if let Some(data_dir) = dirs::data_local_dir() {
            let data_dir = data_dir.join(APP_DIR_NAME);
            let config_dir = dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .unwrap_or_else(|| data_dir.clone());

            debug!("Platform data dir: {}", data_dir.display());

            return Ok(Self {
                log_dir: data_dir.clone(),
                data_dir,
                config_dir,
                source: PathSource::PlatformDefault,
            });
        }

        if let Some(home) = env::var_os("HOME") {
            let dir = PathBuf::from(home).join(".local/share").join(APP_DIR_NAME);
            warn!("Using home fallback path: {}", dir.display());
            return Ok(Self::rooted_at(dir, PathSource::HomeFallback));
        }

        Err(ConfigError::DirectoryNotFound {
            location: ErrorLocation::from(Location::caller()),
            reason: format!("Cannot determine data directory. Set {DATA_DIR_ENV_VAR}."),
        })
    }
}
