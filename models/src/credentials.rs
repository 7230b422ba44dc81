//! Username/password pair posted to `/login` and `/register`.

use crate::{ErrorLocation, ModelError};

use common::RedactedToken;

use std::panic::Location;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: RedactedToken,
}

impl Credentials {
    /// Validate and wrap a credential pair.
    ///
    /// Both fields are required; the username is trimmed, the password is kept verbatim.
    #[track_caller]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, ModelError> {
        let username = username.into().trim().to_string();
        if username.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Username is required"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let password = RedactedToken::new(password);
        if password.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Password is required"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl Serialize for Credentials {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut body = serializer.serialize_struct("Credentials", 2)?;
        body.serialize_field("username", &self.username)?;
        body.serialize_field("password", self.password.as_str())?;
        body.end()
    }
}
