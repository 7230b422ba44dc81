use client_core::error::{ConfigError, CoreError};
use common::ErrorLocation;
use models::{AuthError, FetchError, ModelError, SendError};

use std::panic::Location;

use thiserror::Error;

/// Errors surfaced by CLI commands.
///
/// Infrastructure failures keep their detail for the log; action failures
/// carry only the fixed literal the user sees.
#[derive(Debug, Error)]
pub enum ParleyError {
    /// Error from this App
    #[error("Parley Error: {message} {location}")]
    Parley {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core wiring (config, store, gateway construction)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// Input rejected before any request was made
    #[error("Invalid Input: {message} {location}")]
    InvalidInput {
        message: String,
        location: ErrorLocation,
    },

    /// A network action failed
    #[error("Action Error: {failure} {location}")]
    Action {
        failure: String,
        location: ErrorLocation,
    },
}

impl ParleyError {
    /// Text printed to the terminal.
    pub fn user_message(&self) -> String {
        match self {
            ParleyError::Action { failure, .. } => failure.clone(),
            ParleyError::InvalidInput { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    #[track_caller]
    fn action(failure: impl ToString) -> Self {
        ParleyError::Action {
            failure: failure.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ParleyError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        ParleyError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for ParleyError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        ParleyError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ModelError> for ParleyError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        let ModelError::Validation { message, .. } = error;
        ParleyError::InvalidInput {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for ParleyError {
    #[track_caller]
    fn from(error: AuthError) -> Self {
        ParleyError::action(error)
    }
}

impl From<FetchError> for ParleyError {
    #[track_caller]
    fn from(error: FetchError) -> Self {
        ParleyError::action(error)
    }
}

impl From<SendError> for ParleyError {
    #[track_caller]
    fn from(error: SendError) -> Self {
        ParleyError::action(error)
    }
}
