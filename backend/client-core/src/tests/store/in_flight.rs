use crate::store::{InFlightTracker, OperationKey};

/// **VALUE**: Verifies a newer ticket supersedes an older one for the same key.
///
/// **WHY THIS MATTERS**: Two rapid fetches race; only the latest-issued may land.
///
/// **BUG THIS CATCHES**: Would catch generation bookkeeping that lets both apply.
#[test]
fn given_two_tickets_for_same_key_when_checked_then_only_latest_is_current() {
    let mut tracker = InFlightTracker::default();

    let first = tracker.begin(OperationKey::FetchMessages);
    let second = tracker.begin(OperationKey::FetchMessages);

    assert!(!tracker.is_current(&first));
    assert!(tracker.is_current(&second));
}

#[test]
fn given_tickets_for_different_keys_when_checked_then_both_current() {
    let mut tracker = InFlightTracker::default();

    let users = tracker.begin(OperationKey::FetchUsers);
    let messages = tracker.begin(OperationKey::FetchMessages);

    assert!(tracker.is_current(&users));
    assert!(tracker.is_current(&messages));
}

/// **VALUE**: Verifies finishing a stale ticket keeps the newer marker.
///
/// **WHY THIS MATTERS**: If the older response arrives first, the newer request is
/// still outstanding and its completion must still apply.
///
/// **BUG THIS CATCHES**: Would catch `finish` removing the key unconditionally.
#[test]
fn given_stale_ticket_when_finished_first_then_newer_still_applies() {
    let mut tracker = InFlightTracker::default();
    let stale = tracker.begin(OperationKey::Login);
    let fresh = tracker.begin(OperationKey::Login);

    assert!(!tracker.finish(&stale));
    assert!(tracker.is_in_flight(OperationKey::Login));
    assert!(tracker.finish(&fresh));
    assert!(!tracker.is_in_flight(OperationKey::Login));
}

#[test]
fn given_finished_ticket_when_finished_again_then_rejected() {
    let mut tracker = InFlightTracker::default();
    let ticket = tracker.begin(OperationKey::SendMessage);

    assert!(tracker.finish(&ticket));
    assert!(!tracker.finish(&ticket));
}

#[test]
fn given_operation_keys_when_displayed_then_snake_case_names() {
    assert_eq!(OperationKey::FetchUsers.to_string(), "fetch_users");
    assert_eq!(OperationKey::SendMessage.to_string(), "send_message");
}
