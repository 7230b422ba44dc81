use crate::commands::navigate::land;
use crate::error::ParleyError;

use client_core::Messenger;
use client_core::routing::{LOGIN_PATH, MESSAGES_PATH};

use models::Credentials;

/// Log in, then land on the message list.
pub async fn login(
    messenger: &Messenger,
    username: &str,
    password: &str,
) -> Result<String, ParleyError> {
    let credentials = Credentials::new(username, password)?;
    messenger.login(&credentials).await?;

    let view = land(messenger, MESSAGES_PATH).await?;
    Ok(format!("Logged in as {}.\n{view}", credentials.username()))
}

/// Register, then land on the login view. Registration does not log in.
pub async fn register(
    messenger: &Messenger,
    username: &str,
    password: &str,
) -> Result<String, ParleyError> {
    let credentials = Credentials::new(username, password)?;
    messenger.register(&credentials).await?;

    let view = land(messenger, LOGIN_PATH).await?;
    Ok(format!("Registered {}.\n{view}", credentials.username()))
}

pub async fn logout(messenger: &Messenger) -> Result<String, ParleyError> {
    messenger.logout().await?;

    let view = land(messenger, LOGIN_PATH).await?;
    Ok(format!("Logged out.\n{view}"))
}
