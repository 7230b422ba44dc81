// Tests for the store actor: serialized mutation and stale-completion dropping

use crate::state::{MessageEvent, SessionEvent};
use crate::store::{OperationKey, Store};

use common::RedactedToken;
use models::MessageRecord;

fn message(id: i64) -> MessageRecord {
    MessageRecord {
        id,
        from: String::from("bob"),
        message: format!("m{id}"),
    }
}

/// **VALUE**: Verifies `apply` is visible to the caller once it returns.
///
/// **WHY THIS MATTERS**: Commands read the session right after initializing it.
///
/// **BUG THIS CATCHES**: Would catch fire-and-forget sends that return before the
/// actor processed the event.
#[tokio::test]
async fn given_store_when_event_applied_then_snapshot_reflects_it() {
    let store = Store::new();

    store
        .apply(SessionEvent::Initialized(Some(RedactedToken::new("T"))))
        .await
        .unwrap();

    assert!(store.session().await.is_authenticated());
}

/// **VALUE**: Verifies a response for an older request is dropped.
///
/// **WHY THIS MATTERS**: Without this, whichever response settles last wins, even
/// if it answers a request the user has since re-issued.
///
/// **BUG THIS CATCHES**: Would catch the actor applying completions without
/// checking tickets.
#[tokio::test]
async fn given_two_fetches_when_older_completes_last_then_newer_result_kept() {
    let store = Store::new();

    // GIVEN: Two fetches issued in order
    let older = store.begin(OperationKey::FetchMessages).await.unwrap();
    let newer = store.begin(OperationKey::FetchMessages).await.unwrap();

    // WHEN: The newer settles first, then the older
    let newer_applied = store
        .complete(newer, MessageEvent::FetchSucceeded(vec![message(2)]))
        .await
        .unwrap();
    let older_applied = store
        .complete(older, MessageEvent::FetchSucceeded(vec![message(1)]))
        .await
        .unwrap();

    // THEN: Only the newer result is visible
    assert!(newer_applied);
    assert!(!older_applied);
    assert_eq!(store.messages().await.messages, vec![message(2)]);
}

#[tokio::test]
async fn given_ticket_when_issued_then_operation_in_flight_until_completed() {
    let store = Store::new();

    let ticket = store.begin(OperationKey::SendMessage).await.unwrap();
    assert!(store.is_in_flight(OperationKey::SendMessage).await);

    store.complete(ticket, MessageEvent::SendSucceeded).await.unwrap();
    assert!(!store.is_in_flight(OperationKey::SendMessage).await);
}

#[tokio::test]
async fn given_cloned_store_when_mutated_then_all_clones_observe_change() {
    let store = Store::new();
    let clone = store.clone();

    clone
        .apply(SessionEvent::LoginSucceeded(RedactedToken::new("T")))
        .await
        .unwrap();

    assert!(store.session().await.is_authenticated());
    assert_eq!(store.snapshot().await, clone.snapshot().await);
}
