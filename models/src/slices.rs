//! List state refreshed from the server.

use crate::{FetchError, MessageListError, MessageRecord, UserRecord};

/// Snapshot of `GET /api/users` plus the last fetch failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    pub users: Vec<UserRecord>,
    pub error: Option<FetchError>,
}

impl UserDirectory {
    /// Look up a user by the recipient token used in `/send-message/{token}`.
    pub fn find_by_message_token(&self, message_token: &str) -> Option<&UserRecord> {
        self.users
            .iter()
            .find(|user| user.message_token == message_token)
    }
}

/// Snapshot of `GET /api/messages` plus the last fetch or send failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageList {
    pub messages: Vec<MessageRecord>,
    pub error: Option<MessageListError>,
}
