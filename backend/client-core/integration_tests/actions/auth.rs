use crate::helpers::{SERVER_TOKEN, messenger_for, persisted};

use client_core::gateway::TOKEN_HEADER_KEY;
use models::{AuthError, Credentials};

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn alice() -> Credentials {
    Credentials::new("alice", "pw").unwrap()
}

/// **VALUE**: Verifies a successful login authenticates and persists the token.
///
/// **WHY THIS MATTERS**: Every later request reads the persisted token; a
/// token held only in memory would leave the next request unauthenticated.
///
/// **BUG THIS CATCHES**: Would catch login updating the session but not storage.
#[tokio::test]
async fn given_valid_credentials_when_login_then_authenticated_and_token_persisted() {
    // GIVEN: A server that accepts alice's credentials
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"username": "alice", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": SERVER_TOKEN})))
        .expect(1)
        .mount(&server)
        .await;

    let (messenger, tokens) = messenger_for(&server, None).await;

    // WHEN: Logging in
    let result = messenger.login(&alice()).await;

    // THEN: Session is authenticated with no error and the token is stored
    assert!(result.is_ok());
    let session = messenger.session().await;
    assert!(session.is_authenticated());
    assert_eq!(session.token().unwrap().as_str(), SERVER_TOKEN);
    assert_eq!(session.error(), None);
    assert_eq!(persisted(&tokens).as_deref(), Some(SERVER_TOKEN));
}

#[tokio::test]
async fn given_rejected_credentials_when_login_then_login_failed_and_anonymous() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .mount(&server)
        .await;

    let (messenger, tokens) = messenger_for(&server, None).await;

    let result = messenger.login(&alice()).await;

    assert_eq!(result, Err(AuthError::LoginFailed));
    let session = messenger.session().await;
    assert!(!session.is_authenticated());
    assert_eq!(session.error(), Some(AuthError::LoginFailed));
    assert_eq!(persisted(&tokens), None);
}

/// **VALUE**: Verifies registration never authenticates the client.
///
/// **WHY THIS MATTERS**: The user is expected to log in explicitly afterwards.
///
/// **BUG THIS CATCHES**: Would catch register treating its response as a token.
#[tokio::test]
async fn given_new_account_when_register_then_still_anonymous_without_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "ignored"})))
        .mount(&server)
        .await;

    let (messenger, tokens) = messenger_for(&server, None).await;

    let result = messenger.register(&alice()).await;

    assert!(result.is_ok());
    let session = messenger.session().await;
    assert!(!session.is_authenticated());
    assert_eq!(session.error(), None);
    assert_eq!(persisted(&tokens), None);
}

#[tokio::test]
async fn given_taken_username_when_register_then_registration_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let (messenger, _tokens) = messenger_for(&server, None).await;

    let result = messenger.register(&alice()).await;

    assert_eq!(result, Err(AuthError::RegistrationFailed));
    assert_eq!(
        messenger.session().await.error(),
        Some(AuthError::RegistrationFailed)
    );
}

/// **VALUE**: Verifies logout sends the session token and clears it everywhere.
///
/// **WHY THIS MATTERS**: A token left in storage would resurrect the session
/// on the next start.
///
/// **BUG THIS CATCHES**: Would catch logout clearing memory but not storage.
#[tokio::test]
async fn given_authenticated_when_logout_succeeds_then_anonymous_and_storage_cleared() {
    // GIVEN: A persisted session and a server expecting its token
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/logout"))
        .and(header(TOKEN_HEADER_KEY, SERVER_TOKEN))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let (messenger, tokens) = messenger_for(&server, Some(SERVER_TOKEN)).await;
    assert!(messenger.session().await.is_authenticated());

    // WHEN: Logging out
    let result = messenger.logout().await;

    // THEN: Both the session and storage are empty
    assert!(result.is_ok());
    assert!(!messenger.session().await.is_authenticated());
    assert_eq!(persisted(&tokens), None);
}

/// **VALUE**: Verifies a failed logout keeps the client's token.
///
/// **WHY THIS MATTERS**: The client only forgets the session once the server
/// confirms; the user can retry.
///
/// **BUG THIS CATCHES**: Would catch logout clearing the token before the response.
#[tokio::test]
async fn given_authenticated_when_logout_fails_then_token_kept_with_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (messenger, tokens) = messenger_for(&server, Some(SERVER_TOKEN)).await;

    let result = messenger.logout().await;

    assert_eq!(result, Err(AuthError::LogoutFailed));
    let session = messenger.session().await;
    assert!(session.is_authenticated());
    assert_eq!(session.error(), Some(AuthError::LogoutFailed));
    assert_eq!(persisted(&tokens).as_deref(), Some(SERVER_TOKEN));
}

/// **VALUE**: Verifies a rejected login leaves an existing session intact.
///
/// **WHY THIS MATTERS**: Retyping a wrong password while logged in must not
/// log the user out or forget the stored token.
///
/// **BUG THIS CATCHES**: Would catch the failure path resetting the session
/// to anonymous or clearing storage.
#[tokio::test]
async fn given_authenticated_when_login_fails_then_token_kept_with_error() {
    // GIVEN: A restored session and a server rejecting the new attempt
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let (messenger, tokens) = messenger_for(&server, Some(SERVER_TOKEN)).await;

    // WHEN: Logging in again with bad credentials
    let result = messenger.login(&alice()).await;

    // THEN: Still authenticated with the same token, plus the error
    assert_eq!(result, Err(AuthError::LoginFailed));
    let session = messenger.session().await;
    assert!(session.is_authenticated());
    assert_eq!(session.token().unwrap().as_str(), SERVER_TOKEN);
    assert_eq!(session.error(), Some(AuthError::LoginFailed));
    assert_eq!(persisted(&tokens).as_deref(), Some(SERVER_TOKEN));
}

#[tokio::test]
async fn given_persisted_token_when_initialized_then_session_authenticated() {
    let server = MockServer::start().await;

    let (messenger, _tokens) = messenger_for(&server, Some("restored")).await;

    let session = messenger.session().await;
    assert!(session.is_authenticated());
    assert_eq!(session.token().unwrap().as_str(), "restored");
}

#[tokio::test]
async fn given_login_error_when_error_cleared_then_error_gone() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let (messenger, _tokens) = messenger_for(&server, None).await;
    let _ = messenger.login(&alice()).await;

    messenger.clear_error().await.unwrap();

    assert_eq!(messenger.session().await.error(), None);
}
