//! Test helpers for integration tests against a mocked messaging server.

use client_core::Messenger;
use client_core::gateway::ApiGateway;
use client_core::token_store::TokenStore;

use wiremock::MockServer;

/// Session token the mocked server hands out.
pub const SERVER_TOKEN: &str = "srv-token-12345";

/// Gateway + token store bound to `server`, with an in-memory backend.
pub fn gateway_for(server: &MockServer) -> (ApiGateway, TokenStore) {
    let tokens = TokenStore::in_memory();
    let gateway = ApiGateway::new(&server.uri(), tokens.clone(), None)
        .expect("mock server URI should parse");
    (gateway, tokens)
}

/// Initialized Messenger bound to `server`, optionally with a persisted token.
pub async fn messenger_for(
    server: &MockServer,
    persisted: Option<&str>,
) -> (Messenger, TokenStore) {
    let (gateway, tokens) = gateway_for(server);
    if let Some(token) = persisted {
        tokens
            .store_token(token)
            .expect("memory store accepts writes");
    }

    let messenger = Messenger::new(gateway, tokens.clone());
    messenger
        .initialize()
        .await
        .expect("store actor should start");
    (messenger, tokens)
}

/// Persisted token as a plain string, for assertions.
pub fn persisted(tokens: &TokenStore) -> Option<String> {
    tokens
        .retrieve_token()
        .expect("memory store reads")
        .map(|token| token.as_str().to_string())
}
