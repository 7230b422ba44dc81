use client_core::config::{ParleyPaths, PathSource};

use parley::cli::Cli;
use parley::commands::execute;
use parley::error::ParleyError;

use clap::Parser;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// End-to-end command tests: real config, real file-backed token store,
// mocked messaging server.
// ============================================================================

const TOKEN: &str = "cli-session-token-42";

async fn run(dir: &TempDir, server: &MockServer, args: &[&str]) -> Result<String, ParleyError> {
    let base_url = server.uri();
    let mut argv = vec!["parley", "--base-url", base_url.as_str()];
    argv.extend_from_slice(args);

    let cli = Cli::try_parse_from(argv).unwrap();
    let paths = ParleyPaths::rooted_at(dir.path(), PathSource::CommandLine);
    execute(&cli, &paths).await
}

/// **VALUE**: Verifies a login in one invocation authenticates the next.
///
/// **WHY THIS MATTERS**: Each CLI call is a fresh process; the persisted token
/// is the only thing connecting them.
///
/// **BUG THIS CATCHES**: Would catch the file store not being written on
/// login or not being read on initialize.
#[tokio::test]
async fn given_login_when_next_command_runs_then_session_restored_from_file() {
    // GIVEN: A server that issues a token and serves messages for it
    let dir = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": TOKEN})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/messages"))
        .and(header("token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "from": "bob", "message": "welcome"}
        ])))
        .mount(&server)
        .await;

    // WHEN: Logging in, then listing messages in a separate invocation
    let login = run(&dir, &server, &["login", "alice", "pw"]).await.unwrap();
    let messages = run(&dir, &server, &["messages"]).await.unwrap();

    // THEN: Login landed on the list, and the second call was authenticated
    assert!(login.starts_with("Logged in as alice."));
    assert!(login.contains("[/messages]"));
    assert!(messages.contains("#1 bob: welcome"));
    assert!(dir.path().join("storage.json").exists());
}

#[tokio::test]
async fn given_rejected_login_when_run_then_login_failed_literal() {
    let dir = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = run(&dir, &server, &["login", "alice", "wrong"])
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Login failed");
}

/// **VALUE**: Verifies guarded commands redirect an anonymous user to login.
///
/// **WHY THIS MATTERS**: Without a session there is nothing to fetch; the
/// client should not even ask the server.
///
/// **BUG THIS CATCHES**: Would catch the guard being bypassed by direct commands.
#[tokio::test]
async fn given_anonymous_when_messages_opened_then_login_view_without_request() {
    let dir = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;

    let output = run(&dir, &server, &["messages"]).await.unwrap();

    assert!(output.starts_with("[/login]"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_anonymous_when_send_attempted_then_nothing_posted() {
    let dir = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;

    let output = run(&dir, &server, &["send", "mt-bob", "hi"]).await.unwrap();

    assert!(output.starts_with("[/login]"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_unknown_path_when_opened_anonymously_then_lands_on_login() {
    let dir = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;

    let output = run(&dir, &server, &["open", "/nowhere"]).await.unwrap();

    assert!(output.starts_with("[/login]"));
}

/// **VALUE**: Verifies a failed send exits with the fixed literal.
///
/// **WHY THIS MATTERS**: Scripts rely on the non-zero exit; users on the message.
///
/// **BUG THIS CATCHES**: Would catch send failures being swallowed by the
/// follow-up navigation.
#[tokio::test]
async fn given_session_when_send_fails_then_send_failed_literal() {
    // GIVEN: A persisted session from an earlier login
    let dir = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": TOKEN})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/messages"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    run(&dir, &server, &["login", "alice", "pw"]).await.unwrap();

    // WHEN: Sending
    let err = run(&dir, &server, &["send", "mt-bob", "hi"]).await.unwrap_err();

    // THEN: Only the literal reaches the user
    assert_eq!(err.user_message(), "Send message failed");
}

#[tokio::test]
async fn given_invalid_recipient_when_send_then_rejected_before_request() {
    let dir = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;

    let err = run(&dir, &server, &["send", "a/b", "hi"]).await.unwrap_err();

    assert!(matches!(err, ParleyError::InvalidInput { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_failed_logout_when_status_checked_then_still_authenticated() {
    let dir = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": TOKEN})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    run(&dir, &server, &["login", "alice", "pw"]).await.unwrap();

    let err = run(&dir, &server, &["logout"]).await.unwrap_err();
    let status = run(&dir, &server, &["status"]).await.unwrap();

    assert_eq!(err.user_message(), "Logout failed");
    assert!(status.contains("Session: authenticated"));
}

#[tokio::test]
async fn given_corrupt_config_when_run_then_core_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();
    let server = MockServer::start().await;

    let err = run(&dir, &server, &["status"]).await.unwrap_err();

    assert!(matches!(err, ParleyError::Core { .. }));
}

async fn run_without_override(dir: &TempDir, args: &[&str]) -> Result<String, ParleyError> {
    let mut argv = vec!["parley"];
    argv.extend_from_slice(args);

    let cli = Cli::try_parse_from(argv).unwrap();
    let paths = ParleyPaths::rooted_at(dir.path(), PathSource::CommandLine);
    execute(&cli, &paths).await
}

/// **VALUE**: Verifies `config` persists settings that later commands use.
///
/// **WHY THIS MATTERS**: Without a saved server URL every invocation would
/// need `--base-url`.
///
/// **BUG THIS CATCHES**: Would catch the settings being validated but never
/// written, or written somewhere `AppConfig::load` does not read.
#[tokio::test]
async fn given_config_saved_when_status_runs_then_saved_server_used() {
    // GIVEN: A fresh directory
    let dir = tempfile::tempdir().unwrap();

    // WHEN: Saving a server and timeout, then checking status
    let saved = run_without_override(
        &dir,
        &["config", "--server", "http://127.0.0.1:4567", "--timeout-secs", "5"],
    )
    .await
    .unwrap();
    let status = run_without_override(&dir, &["status"]).await.unwrap();

    // THEN: The file exists and status reports the saved server
    assert!(saved.starts_with("Config saved"));
    assert!(saved.contains("Request timeout: 5s"));
    assert!(dir.path().join("config.json").exists());
    assert!(status.contains("Server: http://127.0.0.1:4567/"));
}

#[tokio::test]
async fn given_zero_timeout_when_config_saved_then_rejected_and_nothing_written() {
    let dir = tempfile::tempdir().unwrap();

    let err = run_without_override(&dir, &["config", "--timeout-secs", "0"])
        .await
        .unwrap_err();

    assert!(matches!(err, ParleyError::Core { .. }));
    assert!(!dir.path().join("config.json").exists());
}
