//! Login, registration and logout.

use crate::actions::{Messenger, log_store_failure, settle};
use crate::gateway::{LOGIN_ENDPOINT, LOGOUT_ENDPOINT, REGISTER_ENDPOINT};
use crate::state::SessionEvent;
use crate::store::OperationKey;

use common::RedactedToken;
use models::{AuthError, Credentials, LoginResponse};

use log::{debug, info, warn};
use serde_json::Value;

impl Messenger {
    /// Exchange credentials for a session token.
    ///
    /// On success the token is persisted and the session becomes authenticated.
    /// On any failure the session keeps its state and records "Login failed".
    pub async fn login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let key = OperationKey::Login;
        let ticket = self.store.begin(key).await.map_err(|e| {
            log_store_failure(key, &e);
            AuthError::LoginFailed
        })?;

        debug!("Attempting login for {}", credentials.username());

        let outcome = self
            .gateway
            .post_public::<_, LoginResponse>(LOGIN_ENDPOINT, credentials)
            .await;

        match outcome {
            Ok(response) => {
                debug!("Login response: {response:?}");
                let token = RedactedToken::new(response.token);

                let applied = self
                    .store
                    .complete(ticket, SessionEvent::LoginSucceeded(token.clone()))
                    .await
                    .map_err(|e| {
                        log_store_failure(key, &e);
                        AuthError::LoginFailed
                    })?;

                // A superseded login must not overwrite the newer attempt's token.
                if !applied {
                    debug!("Login superseded by a newer attempt");
                    return Err(AuthError::LoginFailed);
                }

                if let Err(e) = self.tokens.store_token(token.as_str()) {
                    warn!("Logged in but could not persist session token: {e}");
                }
                info!("Logged in as {}", credentials.username());
                Ok(())
            }
            Err(e) => {
                warn!("Login error ({}): {e}", e.error_category());
                if let Err(e) = self.store.complete(ticket, SessionEvent::LoginFailed).await {
                    log_store_failure(key, &e);
                }
                Err(AuthError::LoginFailed)
            }
        }
    }

    /// Create an account. Success clears the session error but does not log in.
    pub async fn register(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let key = OperationKey::Register;
        let ticket = self.store.begin(key).await.map_err(|e| {
            log_store_failure(key, &e);
            AuthError::RegistrationFailed
        })?;

        let outcome = self
            .gateway
            .post_public::<_, Value>(REGISTER_ENDPOINT, credentials)
            .await;

        let (event, result) = match outcome {
            Ok(payload) => {
                debug!("Register response: {payload}");
                info!("Registered {}", credentials.username());
                (SessionEvent::RegisterSucceeded, Ok(()))
            }
            Err(e) => {
                warn!("Registration error ({}): {e}", e.error_category());
                (
                    SessionEvent::RegisterFailed,
                    Err(AuthError::RegistrationFailed),
                )
            }
        };

        let completion = self.store.complete(ticket, event).await;
        settle(key, completion, result, AuthError::RegistrationFailed)
    }

    /// End the session on the server, then locally.
    ///
    /// The request carries the in-memory session token. Only a successful
    /// response clears the persisted token and returns the session to
    /// anonymous; on failure the client keeps its token and records
    /// "Logout failed", even though the server may already have invalidated it.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let key = OperationKey::Logout;
        let session = self.store.session().await;

        let ticket = self.store.begin(key).await.map_err(|e| {
            log_store_failure(key, &e);
            AuthError::LogoutFailed
        })?;

        let outcome = self
            .gateway
            .post_with_token::<Value>(LOGOUT_ENDPOINT, session.token())
            .await;

        match outcome {
            Ok(_) => {
                let applied = self
                    .store
                    .complete(ticket, SessionEvent::LogoutSucceeded)
                    .await
                    .map_err(|e| {
                        log_store_failure(key, &e);
                        AuthError::LogoutFailed
                    })?;

                if !applied {
                    debug!("Logout superseded by a newer attempt");
                    return Err(AuthError::LogoutFailed);
                }

                if let Err(e) = self.tokens.clear_token() {
                    warn!("Logged out but could not clear persisted token: {e}");
                }
                info!("Logged out");
                Ok(())
            }
            Err(e) => {
                warn!("Logout error ({}): {e}", e.error_category());
                if let Err(e) = self.store.complete(ticket, SessionEvent::LogoutFailed).await {
                    log_store_failure(key, &e);
                }
                Err(AuthError::LogoutFailed)
            }
        }
    }
}
