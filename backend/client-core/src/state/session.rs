//! Session state machine: `Anonymous` ⇄ `Authenticated`, with an orthogonal error.

use common::RedactedToken;
use models::{AuthError, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Process start, carrying whatever token was persisted.
    Initialized(Option<RedactedToken>),
    LoginSucceeded(RedactedToken),
    LoginFailed,
    /// Registration never authenticates; the user still has to log in.
    RegisterSucceeded,
    RegisterFailed,
    LogoutSucceeded,
    /// The session keeps its token even though the server may already have
    /// invalidated it.
    LogoutFailed,
    /// Entering the login view.
    ErrorCleared,
}

pub fn reduce_session(session: Session, event: SessionEvent) -> Session {
    match event {
        SessionEvent::Initialized(Some(token)) => Session::authenticated(token),
        SessionEvent::Initialized(None) => Session::anonymous(),
        SessionEvent::LoginSucceeded(token) => Session::authenticated(token),
        SessionEvent::LoginFailed => with_error(session, AuthError::LoginFailed),
        SessionEvent::RegisterSucceeded | SessionEvent::ErrorCleared => Session {
            error: None,
            ..session
        },
        SessionEvent::RegisterFailed => with_error(session, AuthError::RegistrationFailed),
        SessionEvent::LogoutSucceeded => Session::anonymous(),
        SessionEvent::LogoutFailed => with_error(session, AuthError::LogoutFailed),
    }
}

fn with_error(session: Session, error: AuthError) -> Session {
    Session {
        error: Some(error),
        ..session
    }
}
