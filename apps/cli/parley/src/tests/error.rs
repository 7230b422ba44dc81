// Unit tests for error module
// Tests what reaches the terminal for each kind of failure

use crate::error::ParleyError;

use models::{AuthError, Credentials, SendError};

/// **VALUE**: Verifies action failures print only their fixed literal.
///
/// **WHY THIS MATTERS**: Users see "Login failed", never transport detail or
/// source locations; those only go to the log.
///
/// **BUG THIS CATCHES**: Would catch `user_message()` falling back to the full
/// Display output for action errors.
#[test]
fn given_action_error_when_user_message_then_literal_only() {
    // GIVEN: Errors converted from action failures
    let login = ParleyError::from(AuthError::LoginFailed);
    let send = ParleyError::from(SendError::SendFailed);

    // WHEN/THEN: The terminal text is the literal
    assert_eq!(login.user_message(), "Login failed");
    assert_eq!(send.user_message(), "Send message failed");

    // AND: The log text still carries the location
    assert!(login.to_string().contains("Action Error"));
}

#[test]
fn given_validation_error_when_converted_then_invalid_input_message() {
    let model_error = Credentials::new("  ", "pw").unwrap_err();

    let err = ParleyError::from(model_error);

    assert!(matches!(err, ParleyError::InvalidInput { .. }));
    assert_eq!(err.user_message(), "Username is required");
}
