use crate::state::{AppState, DirectoryEvent, MessageEvent, SessionEvent};

use common::RedactedToken;
use models::FetchError;

/// **VALUE**: Verifies an event only touches its own slice.
///
/// **WHY THIS MATTERS**: A failed user fetch must not disturb the session or messages.
///
/// **BUG THIS CATCHES**: Would catch routing an event to the wrong reducer.
#[test]
fn given_app_state_when_directory_event_applied_then_other_slices_unchanged() {
    let state = AppState::default().apply(SessionEvent::LoginSucceeded(RedactedToken::new("T")).into());
    let before = state.clone();

    let after = state.apply(DirectoryEvent::FetchFailed.into());

    assert_eq!(after.session, before.session);
    assert_eq!(after.messages, before.messages);
    assert_eq!(after.directory.error, Some(FetchError::UsersFailed));
}

#[test]
fn given_app_state_when_message_event_applied_then_session_unchanged() {
    let state = AppState::default();

    let after = state.apply(MessageEvent::FetchSucceeded(vec![]).into());

    assert!(!after.session.is_authenticated());
    assert!(after.messages.messages.is_empty());
}
