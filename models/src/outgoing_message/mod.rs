//! Body of `POST /api/messages`.

pub mod builder;

use serde::Serialize;

/// A validated message addressed to a recipient's message token.
///
/// Construct through [`builder::OutgoingMessageBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMessage {
    #[serde(rename = "messagetoken")]
    pub(crate) message_token: String,
    pub(crate) message: String,
}

impl OutgoingMessage {
    pub fn message_token(&self) -> &str {
        &self.message_token
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
