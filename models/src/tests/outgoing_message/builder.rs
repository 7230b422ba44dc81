use crate::outgoing_message::builder::MAX_MESSAGE_CHARS;
use crate::{ModelError, OutgoingMessageBuilder};

/// **VALUE**: Verifies a complete builder produces the message with both fields intact.
///
/// **WHY THIS MATTERS**: This is the only way the send form constructs a request body.
///
/// **BUG THIS CATCHES**: Would catch if fields are swapped or trimmed during build.
#[test]
fn given_recipient_and_message_when_building_then_returns_outgoing_message() {
    // GIVEN: A fully populated builder
    let builder = OutgoingMessageBuilder::default()
        .with_recipient("mt-bob")
        .with_message("  hello bob  ");

    // WHEN: Building
    let message = builder.build().unwrap();

    // THEN: Both fields are preserved verbatim
    assert_eq!(message.message_token(), "mt-bob");
    assert_eq!(message.message(), "  hello bob  ");
}

/// **VALUE**: Verifies a missing recipient is rejected.
///
/// **WHY THIS MATTERS**: A message without a recipient token would be posted as
/// `{"messagetoken": null}` and fail server-side with no useful feedback.
///
/// **BUG THIS CATCHES**: Would catch if the recipient becomes optional.
#[test]
fn given_missing_recipient_when_building_then_returns_validation_error() {
    let result = OutgoingMessageBuilder::default().with_message("hi").build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Recipient is required");
        }
    }
}

#[test]
fn given_blank_recipient_when_building_then_returns_validation_error() {
    let result = OutgoingMessageBuilder::default()
        .with_recipient("   ")
        .with_message("hi")
        .build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Recipient cannot be empty");
        }
    }
}

/// **VALUE**: Verifies recipients containing path separators are rejected.
///
/// **WHY THIS MATTERS**: Recipient tokens are taken from `/send-message/{token}`.
/// A slash means the route was mis-parsed.
///
/// **BUG THIS CATCHES**: Would catch if the separator check is dropped.
#[test]
fn given_recipient_with_slash_when_building_then_returns_validation_error() {
    let result = OutgoingMessageBuilder::default()
        .with_recipient("a/b")
        .with_message("hi")
        .build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert!(message.starts_with("Invalid recipient token:"));
        }
    }
}

/// **VALUE**: Verifies an empty body is accepted.
///
/// **WHY THIS MATTERS**: The send form never required a non-empty message;
/// the server decides what it accepts.
///
/// **BUG THIS CATCHES**: Would catch an over-eager emptiness check.
#[test]
fn given_empty_message_when_building_then_succeeds() {
    let result = OutgoingMessageBuilder::default()
        .with_recipient("mt-bob")
        .with_message("")
        .build();

    assert!(result.is_ok());
}

#[test]
fn given_missing_message_when_building_then_returns_validation_error() {
    let result = OutgoingMessageBuilder::default()
        .with_recipient("mt-bob")
        .build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Message is required");
        }
    }
}

#[test]
fn given_oversized_message_when_building_then_returns_validation_error() {
    let result = OutgoingMessageBuilder::default()
        .with_recipient("mt-bob")
        .with_message("x".repeat(MAX_MESSAGE_CHARS + 1))
        .build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert!(message.starts_with("Message too long"));
        }
    }
}

/// **VALUE**: Verifies the wire body uses the `messagetoken` key.
///
/// **WHY THIS MATTERS**: The server reads exactly `{messagetoken, message}`.
///
/// **BUG THIS CATCHES**: Would catch a serde rename regression to `message_token`.
#[test]
fn given_outgoing_message_when_serialized_then_uses_wire_field_names() {
    let message = OutgoingMessageBuilder::default()
        .with_recipient("mt-bob")
        .with_message("hi")
        .build()
        .unwrap();

    let json = serde_json::to_value(&message).unwrap();

    assert_eq!(json, serde_json::json!({"messagetoken": "mt-bob", "message": "hi"}));
}
