// Unit tests for the session state machine
// Every transition is a pure function, so no runtime or store is involved

use crate::state::{SessionEvent, reduce_session};

use common::RedactedToken;
use models::{AuthError, Session};

fn token(value: &str) -> RedactedToken {
    RedactedToken::new(value)
}

/// **VALUE**: Verifies initialization from a persisted token.
///
/// **WHY THIS MATTERS**: A returning user must land in the authenticated state
/// without logging in again.
///
/// **BUG THIS CATCHES**: Would catch if Initialized ignored the persisted token.
#[test]
fn given_persisted_token_when_initialized_then_authenticated_without_error() {
    // GIVEN: Any prior session
    let session = Session::anonymous();

    // WHEN: Initializing with persisted "T"
    let session = reduce_session(session, SessionEvent::Initialized(Some(token("T"))));

    // THEN: {token: "T", isAuthenticated: true, error: null}
    assert_eq!(session.token().map(RedactedToken::as_str), Some("T"));
    assert!(session.is_authenticated());
    assert_eq!(session.error(), None);
}

#[test]
fn given_no_persisted_token_when_initialized_then_anonymous_without_error() {
    let session = Session {
        token: Some(token("stale")),
        error: Some(AuthError::LoginFailed),
    };

    let session = reduce_session(session, SessionEvent::Initialized(None));

    assert_eq!(session, Session::anonymous());
    assert!(!session.is_authenticated());
}

/// **VALUE**: Verifies login success authenticates and clears a prior error.
///
/// **WHY THIS MATTERS**: A user who mistyped once and then succeeded must not
/// keep seeing "Login failed".
///
/// **BUG THIS CATCHES**: Would catch if the error survives the transition.
#[test]
fn given_failed_attempt_when_login_succeeds_then_error_cleared() {
    let session = Session {
        token: None,
        error: Some(AuthError::LoginFailed),
    };

    let session = reduce_session(session, SessionEvent::LoginSucceeded(token("fresh")));

    assert!(session.is_authenticated());
    assert_eq!(session.token().map(RedactedToken::as_str), Some("fresh"));
    assert_eq!(session.error(), None);
}

/// **VALUE**: Verifies login failure keeps the current authentication state.
///
/// **WHY THIS MATTERS**: A failed re-login must not log an existing user out.
///
/// **BUG THIS CATCHES**: Would catch if LoginFailed reset to anonymous.
#[test]
fn given_authenticated_session_when_login_fails_then_state_kept_and_error_set() {
    let session = Session::authenticated(token("T"));

    let session = reduce_session(session, SessionEvent::LoginFailed);

    assert!(session.is_authenticated());
    assert_eq!(session.token().map(RedactedToken::as_str), Some("T"));
    assert_eq!(session.error(), Some(AuthError::LoginFailed));
}

#[test]
fn given_anonymous_session_when_login_fails_then_stays_anonymous() {
    let session = reduce_session(Session::anonymous(), SessionEvent::LoginFailed);

    assert!(!session.is_authenticated());
    assert_eq!(
        session.error().map(|e| e.to_string()),
        Some(String::from("Login failed"))
    );
}

/// **VALUE**: Verifies registration never authenticates.
///
/// **WHY THIS MATTERS**: After registering, the user must still log in explicitly.
///
/// **BUG THIS CATCHES**: Would catch RegisterSucceeded being wired like LoginSucceeded.
#[test]
fn given_anonymous_with_error_when_register_succeeds_then_only_error_cleared() {
    let session = Session {
        token: None,
        error: Some(AuthError::RegistrationFailed),
    };

    let session = reduce_session(session, SessionEvent::RegisterSucceeded);

    assert_eq!(session, Session::anonymous());
}

#[test]
fn given_session_when_register_fails_then_registration_error_set() {
    let session = reduce_session(Session::anonymous(), SessionEvent::RegisterFailed);

    assert_eq!(session.error(), Some(AuthError::RegistrationFailed));
    assert!(!session.is_authenticated());
}

#[test]
fn given_authenticated_when_logout_succeeds_then_anonymous() {
    let session = Session {
        token: Some(token("T")),
        error: Some(AuthError::LogoutFailed),
    };

    let session = reduce_session(session, SessionEvent::LogoutSucceeded);

    assert_eq!(session, Session::anonymous());
}

/// **VALUE**: Pins the logout asymmetry: a failed logout keeps the token.
///
/// **WHY THIS MATTERS**: The server may already have invalidated the token, but the
/// client only forgets it on a successful response. Changing that is a product
/// decision, not a refactor.
///
/// **BUG THIS CATCHES**: Would catch a silent "fix" that clears the token on failure.
#[test]
fn given_authenticated_when_logout_fails_then_token_kept_and_error_set() {
    let session = reduce_session(
        Session::authenticated(token("T")),
        SessionEvent::LogoutFailed,
    );

    assert!(session.is_authenticated());
    assert_eq!(session.token().map(RedactedToken::as_str), Some("T"));
    assert_eq!(session.error(), Some(AuthError::LogoutFailed));
}

#[test]
fn given_error_when_cleared_then_authentication_untouched() {
    let session = Session {
        token: Some(token("T")),
        error: Some(AuthError::LogoutFailed),
    };

    let session = reduce_session(session, SessionEvent::ErrorCleared);

    assert_eq!(session, Session::authenticated(token("T")));
}
