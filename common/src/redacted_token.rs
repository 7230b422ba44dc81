//! Secret strings (session tokens, passwords) with redacted Debug output.

use crate::{ErrorLocation, RedactError};

use std::fmt;
use std::panic::Location;

use serde::ser::Error;
use zeroize::Zeroize;

/// Number of leading characters [`RedactedToken::hint`] may reveal.
const HINT_PREFIX_LEN: usize = 4;

/// A secret that never exposes its value in logs or debug output.
///
/// Session tokens are the only durable credential the client holds, so every
/// place that carries one in memory uses this wrapper.
#[derive(Clone)]
pub struct RedactedToken {
    inner: String,
}

impl RedactedToken {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            inner: secret.into(),
        }
    }

    /// Get the actual value for transmission or persistence.
    ///
    /// # Security Note
    /// Only call this when writing the value to a header, a request body or the token store.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Length of the secret (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Short prefix followed by an ellipsis, for status output.
    ///
    /// Secrets no longer than twice the prefix are fully masked.
    pub fn hint(&self) -> String {
        if self.inner.chars().count() <= HINT_PREFIX_LEN * 2 {
            return String::from("****");
        }
        let prefix: String = self.inner.chars().take(HINT_PREFIX_LEN).collect();
        format!("{prefix}…")
    }
}

impl PartialEq for RedactedToken {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for RedactedToken {}

impl fmt::Debug for RedactedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedToken([REDACTED])")
    }
}

impl fmt::Display for RedactedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl Drop for RedactedToken {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

// Prevent accidental serialization
impl serde::Serialize for RedactedToken {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::Serialization {
            message: String::from("RedactedToken cannot be serialized - use as_str() explicitly"),
            location: ErrorLocation::from(Location::caller()),
        }))
    }
}
