use crate::helpers::gateway_for;

use client_core::error::GatewayError;
use client_core::gateway::{ApiGateway, TOKEN_HEADER_KEY, USERS_ENDPOINT};
use client_core::token_store::TokenStore;

use std::net::TcpListener;

use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the persisted token travels in a header literally named `token`.
///
/// **WHY THIS MATTERS**: The server only understands this bespoke header. An
/// `Authorization: Bearer` header would be ignored and every call would fail.
///
/// **BUG THIS CATCHES**: Would catch a switch to `bearer_auth()` or a renamed header.
#[tokio::test]
async fn given_persisted_token_when_get_issued_then_token_header_attached() {
    // GIVEN: A server that only answers when the token header matches
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(header(TOKEN_HEADER_KEY, "T-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let (gateway, tokens) = gateway_for(&server);
    tokens.store_token("T-1").unwrap();

    // WHEN: Issuing the request
    let result: Result<Value, GatewayError> = gateway.get(USERS_ENDPOINT).await;

    // THEN: The mock matched and no standard auth header was sent
    assert_eq!(result.unwrap(), json!([]));

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn given_no_persisted_token_when_get_issued_then_no_token_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let (gateway, _tokens) = gateway_for(&server);

    let _: Value = gateway.get(USERS_ENDPOINT).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get(TOKEN_HEADER_KEY).is_none());
}

/// **VALUE**: Verifies the hook re-reads the store on every call.
///
/// **WHY THIS MATTERS**: After login the very next request must carry the new token.
///
/// **BUG THIS CATCHES**: Would catch the token being captured once at construction.
#[tokio::test]
async fn given_token_stored_after_construction_when_get_issued_then_new_token_used() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/messages"))
        .and(header(TOKEN_HEADER_KEY, "later"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let (gateway, tokens) = gateway_for(&server);
    tokens.store_token("later").unwrap();

    let _: Value = gateway.get("/api/messages").await.unwrap();
}

#[tokio::test]
async fn given_persisted_token_when_public_post_issued_then_no_token_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "x"})))
        .mount(&server)
        .await;

    let (gateway, tokens) = gateway_for(&server);
    tokens.store_token("old").unwrap();

    let _: Value = gateway.post_public("login", &json!({})).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get(TOKEN_HEADER_KEY).is_none());
}

/// **VALUE**: Verifies non-2xx responses surface as Server errors with the status.
///
/// **WHY THIS MATTERS**: Actions log the category before collapsing to a literal.
///
/// **BUG THIS CATCHES**: Would catch error statuses being decoded as success bodies.
#[tokio::test]
async fn given_server_error_when_get_issued_then_server_error_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .mount(&server)
        .await;

    let (gateway, _tokens) = gateway_for(&server);

    let result: Result<Value, GatewayError> = gateway.get(USERS_ENDPOINT).await;

    match result {
        Err(GatewayError::Server {
            status, message, ..
        }) => {
            assert_eq!(status.0, 503);
            assert_eq!(message, "down");
        }
        other => panic!("Expected Server error, got {other:?}"),
    }
}

/// **VALUE**: Verifies a refused connection surfaces as an Http error.
///
/// **WHY THIS MATTERS**: Transport failures and server rejections are logged
/// under different categories.
///
/// **BUG THIS CATCHES**: Would catch connection errors being mapped to Server.
#[tokio::test]
async fn given_unreachable_server_when_get_issued_then_http_error() {
    // GIVEN: A port that was bound and released, so nothing listens on it
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let gateway = ApiGateway::new(
        &format!("http://127.0.0.1:{port}"),
        TokenStore::in_memory(),
        None,
    )
    .unwrap();

    // WHEN: Issuing a request
    let result: Result<Value, GatewayError> = gateway.get(USERS_ENDPOINT).await;

    // THEN: The failure is a transport error
    assert!(
        matches!(result, Err(GatewayError::Http { .. })),
        "Expected Http error, got {result:?}"
    );
}
