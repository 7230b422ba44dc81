use common::ErrorLocation;

use thiserror::Error as ThisError;

/// Failures talking to the state actor.
#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("State actor unavailable: {message} {location}")]
    ActorUnavailable {
        message: String,
        location: ErrorLocation,
    },
}
