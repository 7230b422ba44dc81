//! Environment overrides, optionally loaded from a `.env` file.

use crate::config::AppConfig;

use std::env;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

pub const BASE_URL_ENV_VAR: &str = "PARLEY_BASE_URL";

/// Result of attempting to load a .env file.
#[derive(Debug)]
pub struct EnvLoadResult {
    pub path: Option<PathBuf>,
    pub loaded: bool,
}

/// Load `.env` from the current directory, then the executable's directory.
///
/// Missing files are not an error; existing variables are never overwritten.
pub fn try_load_dotenv() -> EnvLoadResult {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {}", path.display());
        return EnvLoadResult {
            path: Some(path),
            loaded: true,
        };
    }

    if let Ok(exe_path) = env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        let env_path = exe_dir.join(".env");
        if env_path.exists() {
            let result = load_dotenv_from(&env_path);
            if result.loaded {
                return result;
            }
        }
    }

    debug!("No .env file found");
    EnvLoadResult {
        path: None,
        loaded: false,
    }
}

/// Load a specific `.env` file. Existing variables are never overwritten.
pub fn load_dotenv_from(env_path: &Path) -> EnvLoadResult {
    match dotenvy::from_path(env_path) {
        Ok(()) => {
            info!("Loaded .env from: {}", env_path.display());
            EnvLoadResult {
                path: Some(env_path.to_path_buf()),
                loaded: true,
            }
        }
        Err(e) => {
            warn!("Failed to load .env at {}: {}", env_path.display(), e);
            EnvLoadResult {
                path: None,
                loaded: false,
            }
        }
    }
}

/// Apply `PARLEY_BASE_URL` on top of a loaded config.
///
/// Returns whether anything changed. Run [`AppConfig::validate`] afterwards.
pub fn apply_env_overrides(config: &mut AppConfig) -> bool {
    match env::var(BASE_URL_ENV_VAR) {
        Ok(url) if !url.trim().is_empty() => {
            info!("Using {BASE_URL_ENV_VAR} override: {url}");
            config.server.base_url = url.trim().to_string();
            true
        }
        Ok(_) => false,
        Err(env::VarError::NotPresent) => false,
        Err(env::VarError::NotUnicode(_)) => {
            warn!("{BASE_URL_ENV_VAR} contains invalid unicode, ignoring");
            false
        }
    }
}
