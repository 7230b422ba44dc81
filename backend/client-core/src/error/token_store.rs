use common::ErrorLocation;

use std::path::PathBuf;

use thiserror::Error;

/// Failures of the persistent key-value store behind the token store.
#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("Store Read Error: {path}: {source} {location}")]
    ReadError {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Store Parse Error: {path}: {reason} {location}")]
    ParseError {
        location: ErrorLocation,
        path: PathBuf,
        reason: String,
    },

    #[error("Store Write Error: {path}: {source} {location}")]
    WriteError {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Store Serialization Error: {reason} {location}")]
    SerializeError {
        location: ErrorLocation,
        reason: String,
    },

    #[error("Store Lock Poisoned {location}")]
    Poisoned { location: ErrorLocation },
}
