use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

/// Failures of a single request issued through the API gateway.
#[derive(Debug, ThisError)]
pub enum GatewayError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server Error: HTTP {status} - {message} {location}")]
    Server {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },
}

impl GatewayError {
    #[track_caller]
    pub fn server(status: u16, body: impl Into<String>) -> Self {
        GatewayError::Server {
            status: HttpStatusCode(status),
            message: body.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status if the server answered with a non-success code.
    pub fn status_code(&self) -> Option<HttpStatusCode> {
        match self {
            GatewayError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Error category for log lines.
    pub fn error_category(&self) -> &'static str {
        match self {
            GatewayError::Http {
                is_timeout: true, ..
            } => "timeout",
            GatewayError::Http {
                is_connection: true,
                ..
            } => "connection",
            GatewayError::Http { .. } => "network",
            GatewayError::Json { .. } => "decode",
            GatewayError::UrlParse { .. } => "url",
            GatewayError::Server { status, .. } if status.is_auth_rejection() => "unauthorized",
            GatewayError::Server { status, .. } if status.is_client_error() => "client_error",
            GatewayError::Server { .. } => "server_error",
        }
    }
}

impl From<url::ParseError> for GatewayError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        GatewayError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        // Categorize BEFORE converting to string
        GatewayError::Http {
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        GatewayError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
