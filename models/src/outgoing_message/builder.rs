use crate::error::model_error::ModelError;
use crate::{ErrorLocation, OutgoingMessage};

use std::panic::Location;

/// Upper bound on a single message body, in characters.
pub const MAX_MESSAGE_CHARS: usize = 4096;

/// Builder for creating validated OutgoingMessage instances.
///
/// The recipient usually comes from a route parameter, so it is checked for
/// emptiness and path separators before it ever reaches the wire.
#[derive(Debug, Default)]
pub struct OutgoingMessageBuilder {
    message_token: Option<String>,
    message: Option<String>,
}

impl OutgoingMessageBuilder {
    pub fn with_recipient(mut self, message_token: impl Into<String>) -> Self {
        self.message_token = Some(message_token.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Build the OutgoingMessage with validation.
    #[track_caller]
    pub fn build(self) -> Result<OutgoingMessage, ModelError> {
        let message_token = self.message_token.ok_or_else(|| ModelError::Validation {
            message: String::from("Recipient is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if message_token.trim().is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Recipient cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if message_token.contains('/') {
            return Err(ModelError::Validation {
                message: format!("Invalid recipient token: {message_token}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let message = self.message.ok_or_else(|| ModelError::Validation {
            message: String::from("Message is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let length = message.chars().count();
        if length > MAX_MESSAGE_CHARS {
            return Err(ModelError::Validation {
                message: format!("Message too long ({length} chars, maximum {MAX_MESSAGE_CHARS})"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(OutgoingMessage {
            message_token,
            message,
        })
    }
}
