//! User-facing failures of session, directory and messaging actions.
//!
//! Each variant renders as a fixed literal. Network failures, rejected
//! credentials and server validation errors all collapse onto the same
//! literal for their operation; transport detail is only logged.

use thiserror::Error as ThisError;

/// Failure of a login, registration or logout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum AuthError {
    #[error("Login failed")]
    LoginFailed,

    #[error("Registration failed")]
    RegistrationFailed,

    #[error("Logout failed")]
    LogoutFailed,
}

/// Failure of a list retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum FetchError {
    #[error("Fetch users failed")]
    UsersFailed,

    #[error("Fetch messages failed")]
    MessagesFailed,
}

/// Failure of a message send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum SendError {
    #[error("Send message failed")]
    SendFailed,
}

/// The message list keeps a single error field shared by fetch and send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum MessageListError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Send(#[from] SendError),
}
