//! Command handlers.
//!
//! Each handler receives the [`Messenger`] built from configuration, performs
//! its action, then renders the view the client lands on. Handlers return the
//! rendered text; `main` decides where it goes.

pub mod auth;
pub mod config;
pub mod messages;
pub mod navigate;
pub mod status;

use crate::cli::{Cli, Command};
use crate::error::ParleyError;
use crate::logger;

use client_core::Messenger;
use client_core::config::env::{EnvLoadResult, apply_env_overrides, try_load_dotenv};
use client_core::config::{AppConfig, ParleyPaths, PathSource};

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::panic::Location;

use log::{debug, info};

/// Load `.env`, resolve directories, start logging, then execute the command.
pub async fn run(cli: Cli) -> Result<String, ParleyError> {
    let (paths, env) = startup(&cli, try_load_dotenv)?;

    create_dir_all(&paths.log_dir).map_err(|e| ParleyError::Parley {
        message: format!("Failed to create log directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // Initialize logger FIRST
    logger::initialize(&paths.log_dir, logger::level_for(cli.verbose))?;
    info!("Log directory: {} ({})", paths.log_dir.display(), paths.source);
    match env.path {
        Some(path) => info!("Environment loaded from {}", path.display()),
        None => debug!("No .env file loaded"),
    }

    execute(&cli, &paths).await
}

/// Load the environment before detecting paths, so `.env` may set the data directory.
pub fn startup(
    cli: &Cli,
    load_env: impl FnOnce() -> EnvLoadResult,
) -> Result<(ParleyPaths, EnvLoadResult), ParleyError> {
    let env = load_env();
    let paths = resolve_paths(cli)?;
    Ok((paths, env))
}

/// `--config-dir` roots every directory; otherwise detect per platform.
pub fn resolve_paths(cli: &Cli) -> Result<ParleyPaths, ParleyError> {
    match &cli.config_dir {
        Some(dir) => Ok(ParleyPaths::rooted_at(dir, PathSource::CommandLine)),
        None => Ok(ParleyPaths::detect()?),
    }
}

/// Load configuration with overrides applied. `--base-url` wins over the environment.
pub fn load_config(cli: &Cli, paths: &ParleyPaths) -> Result<AppConfig, ParleyError> {
    let mut config = AppConfig::load(&paths.config_dir)?;
    apply_env_overrides(&mut config);

    if let Some(base_url) = &cli.base_url {
        info!("Using --base-url override: {base_url}");
        config.server.base_url = base_url.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Build the context and dispatch. Does not touch the global logger.
pub async fn execute(cli: &Cli, paths: &ParleyPaths) -> Result<String, ParleyError> {
    // Edits the file as written, before any override is layered on
    if let Command::Config {
        server,
        timeout_secs,
    } = &cli.command
    {
        return config::configure(paths, server.as_deref(), *timeout_secs);
    }

    let config = load_config(cli, paths)?;

    let messenger = Messenger::from_config(&config, &paths.data_dir)?;
    messenger.initialize().await?;

    match &cli.command {
        Command::Login { username, password } => {
            auth::login(&messenger, username, password).await
        }
        Command::Register { username, password } => {
            auth::register(&messenger, username, password).await
        }
        Command::Logout => auth::logout(&messenger).await,
        Command::Users => messages::users(&messenger).await,
        Command::Messages => messages::messages(&messenger).await,
        Command::Send { recipient, message } => {
            messages::send(&messenger, recipient, message).await
        }
        Command::Open { path } => navigate::open(&messenger, path).await,
        Command::Status => status::status(&messenger, paths).await,
        Command::Config { .. } => config::configure(paths, None, None),
    }
}
