//! Authentication session held in memory by the client.

use crate::AuthError;

use common::RedactedToken;

/// `Anonymous` when `token` is `None`, `Authenticated` otherwise.
///
/// Authentication is derived from the token rather than stored beside it,
/// so the two can never disagree. `error` is orthogonal to both states.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<RedactedToken>,
    pub error: Option<AuthError>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(token: RedactedToken) -> Self {
        Self {
            token: Some(token),
            error: None,
        }
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&RedactedToken> {
        self.token.as_ref()
    }

    pub fn error(&self) -> Option<AuthError> {
        self.error
    }
}
