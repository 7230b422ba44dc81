use crate::{AuthError, FetchError, MessageListError, SendError, Session};

use common::RedactedToken;

/// **VALUE**: Verifies authentication is derived from the token.
///
/// **WHY THIS MATTERS**: `isAuthenticated == (token != null)` is the session's
/// core invariant and the route guard reads nothing else.
///
/// **BUG THIS CATCHES**: Would catch a stored flag drifting from the token.
#[test]
fn given_session_constructors_when_queried_then_authentication_follows_token() {
    let anonymous = Session::anonymous();
    let authenticated = Session::authenticated(RedactedToken::new("T"));

    assert!(!anonymous.is_authenticated());
    assert!(anonymous.token().is_none());
    assert!(authenticated.is_authenticated());
    assert_eq!(authenticated.token().map(RedactedToken::as_str), Some("T"));
    assert_eq!(authenticated.error(), None);
}

/// **VALUE**: Verifies the literal failure strings.
///
/// **WHY THIS MATTERS**: These literals are the complete error surface shown to users.
///
/// **BUG THIS CATCHES**: Would catch any drift in wording.
#[test]
fn given_action_errors_when_displayed_then_render_fixed_literals() {
    assert_eq!(AuthError::LoginFailed.to_string(), "Login failed");
    assert_eq!(AuthError::RegistrationFailed.to_string(), "Registration failed");
    assert_eq!(AuthError::LogoutFailed.to_string(), "Logout failed");
    assert_eq!(FetchError::UsersFailed.to_string(), "Fetch users failed");
    assert_eq!(FetchError::MessagesFailed.to_string(), "Fetch messages failed");
    assert_eq!(SendError::SendFailed.to_string(), "Send message failed");
    assert_eq!(
        MessageListError::from(SendError::SendFailed).to_string(),
        "Send message failed"
    );
}
