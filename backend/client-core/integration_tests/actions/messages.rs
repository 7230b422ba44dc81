use crate::helpers::{SERVER_TOKEN, messenger_for};

use client_core::gateway::TOKEN_HEADER_KEY;
use models::{
    FetchError, MessageListError, MessageRecord, OutgoingMessageBuilder, SendError, UserRecord,
};

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn given_users_on_server_when_fetch_users_then_directory_replaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"username": "bob", "messagetoken": "mt-bob"},
            {"username": "carol", "messageToken": "mt-carol"}
        ])))
        .mount(&server)
        .await;

    let (messenger, _tokens) = messenger_for(&server, Some(SERVER_TOKEN)).await;

    messenger.fetch_users().await.unwrap();

    let directory = messenger.directory().await;
    assert_eq!(directory.error, None);
    assert_eq!(
        directory.users,
        vec![
            UserRecord {
                username: String::from("bob"),
                message_token: String::from("mt-bob"),
            },
            UserRecord {
                username: String::from("carol"),
                message_token: String::from("mt-carol"),
            },
        ]
    );
}

#[tokio::test]
async fn given_server_failure_when_fetch_users_then_users_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (messenger, _tokens) = messenger_for(&server, Some(SERVER_TOKEN)).await;

    let result = messenger.fetch_users().await;

    assert_eq!(result, Err(FetchError::UsersFailed));
    assert_eq!(
        messenger.directory().await.error,
        Some(FetchError::UsersFailed)
    );
}

/// **VALUE**: Verifies a failed refresh keeps the previously fetched messages.
///
/// **WHY THIS MATTERS**: A flaky network should not blank the inbox.
///
/// **BUG THIS CATCHES**: Would catch the failure path resetting the list.
#[tokio::test]
async fn given_fetched_messages_when_refresh_fails_then_previous_list_kept() {
    // GIVEN: One successful fetch, then the server starts failing
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "from": "bob", "message": "hi"}
        ])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/messages"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (messenger, _tokens) = messenger_for(&server, Some(SERVER_TOKEN)).await;
    messenger.fetch_messages().await.unwrap();

    // WHEN: Refreshing
    let result = messenger.fetch_messages().await;

    // THEN: The error is recorded next to the old list
    assert_eq!(result, Err(FetchError::MessagesFailed));
    let list = messenger.messages().await;
    assert_eq!(
        list.messages,
        vec![MessageRecord {
            id: 1,
            from: String::from("bob"),
            message: String::from("hi"),
        }]
    );
    assert_eq!(
        list.error,
        Some(MessageListError::Fetch(FetchError::MessagesFailed))
    );
}

/// **VALUE**: Verifies the send body shape and that the list is not touched.
///
/// **WHY THIS MATTERS**: The server reads `messagetoken`; a camelCase key
/// would be silently dropped.
///
/// **BUG THIS CATCHES**: Would catch serde renames drifting or an optimistic append.
#[tokio::test]
async fn given_valid_message_when_sent_then_posts_body_and_leaves_list_alone() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/messages"))
        .and(header(TOKEN_HEADER_KEY, SERVER_TOKEN))
        .and(body_json(json!({"messagetoken": "mt-bob", "message": "hello"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let (messenger, _tokens) = messenger_for(&server, Some(SERVER_TOKEN)).await;
    let outgoing = OutgoingMessageBuilder::default()
        .with_recipient("mt-bob")
        .with_message("hello")
        .build()
        .unwrap();

    messenger.send_message(&outgoing).await.unwrap();

    let list = messenger.messages().await;
    assert!(list.messages.is_empty());
    assert_eq!(list.error, None);
}

#[tokio::test]
async fn given_server_failure_when_sent_then_send_failed_literal() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/messages"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (messenger, _tokens) = messenger_for(&server, Some(SERVER_TOKEN)).await;
    let outgoing = OutgoingMessageBuilder::default()
        .with_recipient("mt-bob")
        .with_message("hello")
        .build()
        .unwrap();

    let result = messenger.send_message(&outgoing).await;

    assert_eq!(result, Err(SendError::SendFailed));
    let error = messenger.messages().await.error.unwrap();
    assert_eq!(error.to_string(), "Send message failed");
}
