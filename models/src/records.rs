//! Wire records returned by the messaging API.

use serde::{Deserialize, Serialize};

/// An entry of `GET /api/users`.
///
/// `message_token` addresses messages to this user. It is unrelated to the
/// session token and safe to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    #[serde(rename = "messagetoken", alias = "messageToken")]
    pub message_token: String,
}

/// An entry of `GET /api/messages`, kept in server order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub id: i64,
    pub from: String,
    pub message: String,
}

/// Success payload of `POST /login`.
#[derive(Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

impl std::fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResponse")
            .field("token", &"[REDACTED]")
            .finish()
    }
}
