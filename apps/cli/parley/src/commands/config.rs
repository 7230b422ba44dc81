use crate::error::ParleyError;
use crate::views;

use client_core::config::{AppConfig, ParleyPaths};

use log::info;

/// Apply the given settings to `config.json` and save it.
///
/// With no settings the file is left alone and only shown. Environment and
/// `--base-url` overrides are never written back.
pub fn configure(
    paths: &ParleyPaths,
    server: Option<&str>,
    timeout_secs: Option<u64>,
) -> Result<String, ParleyError> {
    let mut config = AppConfig::load(&paths.config_dir)?;

    if server.is_none() && timeout_secs.is_none() {
        return Ok(views::config_view(&config, false));
    }

    if let Some(server) = server {
        config.server.base_url = server.trim().to_string();
    }
    if let Some(timeout_secs) = timeout_secs {
        config.server.request_timeout_secs = Some(timeout_secs);
    }

    config.save(&paths.config_dir)?;
    info!("Saved config to {}", paths.config_dir.display());
    Ok(views::config_view(&config, true))
}
