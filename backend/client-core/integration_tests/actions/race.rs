use crate::helpers::{SERVER_TOKEN, messenger_for, persisted};

use client_core::store::OperationKey;
use models::{AuthError, Credentials, FetchError};

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies an older response arriving late cannot overwrite a newer one.
///
/// **WHY THIS MATTERS**: Two refreshes in quick succession must leave the list
/// showing the result of the second, whatever order the responses land in.
///
/// **BUG THIS CATCHES**: Would catch completions applied without checking
/// whether their ticket was superseded.
#[tokio::test]
async fn given_slow_first_fetch_when_second_fetch_finishes_first_then_first_result_dropped() {
    // GIVEN: The first request is slow and returns stale data
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/messages"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": 1, "from": "old", "message": "stale"}]))
                .set_delay(Duration::from_millis(500)),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/messages"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": 2, "from": "new", "message": "fresh"}])),
        )
        .mount(&server)
        .await;

    let (messenger, _tokens) = messenger_for(&server, Some(SERVER_TOKEN)).await;

    // WHEN: A second fetch is issued while the first is still pending
    let first = {
        let messenger = messenger.clone();
        tokio::spawn(async move { messenger.fetch_messages().await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    messenger.fetch_messages().await.unwrap();

    assert!(!messenger.is_in_flight(OperationKey::FetchMessages).await);

    // THEN: The superseded fetch reports failure and only the second response is visible
    assert_eq!(first.await.unwrap(), Err(FetchError::MessagesFailed));
    let list = messenger.messages().await;
    assert_eq!(list.messages.len(), 1);
    assert_eq!(list.messages[0].id, 2);
}

/// **VALUE**: Verifies a superseded login reports failure instead of success.
///
/// **WHY THIS MATTERS**: Callers navigate on `Ok`. A login whose result was
/// discarded left the session untouched, so reporting success would send the
/// user to a guarded view while still anonymous.
///
/// **BUG THIS CATCHES**: Would catch actions returning `Ok` after the store
/// dropped their completion.
#[tokio::test]
async fn given_slow_successful_login_when_newer_login_rejected_then_both_report_failure() {
    // GIVEN: The first attempt succeeds slowly, the second is rejected quickly
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"username": "alice", "password": "slow"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"token": "slow-ok"}))
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"username": "alice", "password": "fast"})))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let (messenger, tokens) = messenger_for(&server, None).await;

    // WHEN: The second attempt is issued while the first is pending
    let first = {
        let messenger = messenger.clone();
        tokio::spawn(async move {
            let credentials = Credentials::new("alice", "slow").unwrap();
            messenger.login(&credentials).await
        })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    let second = messenger
        .login(&Credentials::new("alice", "fast").unwrap())
        .await;
    let first = first.await.unwrap();

    // THEN: Neither reports success and the session matches what was applied
    assert_eq!(second, Err(AuthError::LoginFailed));
    assert_eq!(first, Err(AuthError::LoginFailed));

    let session = messenger.session().await;
    assert!(!session.is_authenticated());
    assert_eq!(session.error(), Some(AuthError::LoginFailed));
    assert_eq!(persisted(&tokens), None);
}
