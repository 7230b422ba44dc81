use crate::{Credentials, ModelError};

/// **VALUE**: Verifies credentials serialize to the `{username, password}` body.
///
/// **WHY THIS MATTERS**: `/login` and `/register` read exactly these keys, and the
/// password lives in a RedactedToken that refuses derived serialization.
///
/// **BUG THIS CATCHES**: Would catch a derive(Serialize) that errors on the password.
#[test]
fn given_credentials_when_serialized_then_body_contains_plain_fields() {
    // GIVEN: Valid credentials
    let credentials = Credentials::new("alice", "hunter2").unwrap();

    // WHEN: Serializing
    let json = serde_json::to_value(&credentials).unwrap();

    // THEN: Both fields appear in plain text on the wire
    assert_eq!(
        json,
        serde_json::json!({"username": "alice", "password": "hunter2"})
    );
}

/// **VALUE**: Verifies the password is redacted from Debug output.
///
/// **WHY THIS MATTERS**: Login attempts are logged at debug level.
///
/// **BUG THIS CATCHES**: Would catch if the password field becomes a plain String.
#[test]
fn given_credentials_when_debug_formatted_then_password_hidden() {
    let credentials = Credentials::new("alice", "hunter2").unwrap();

    let debug = format!("{credentials:?}");

    assert!(debug.contains("alice"));
    assert!(!debug.contains("hunter2"));
}

#[test]
fn given_padded_username_when_created_then_username_trimmed() {
    let credentials = Credentials::new("  alice ", "pw").unwrap();

    assert_eq!(credentials.username(), "alice");
}

#[test]
fn given_blank_username_when_created_then_returns_validation_error() {
    match Credentials::new("   ", "pw").unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Username is required");
        }
    }
}

#[test]
fn given_empty_password_when_created_then_returns_validation_error() {
    match Credentials::new("alice", "").unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Password is required");
        }
    }
}
