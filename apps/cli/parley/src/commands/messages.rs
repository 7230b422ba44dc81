use crate::commands::navigate::{land, open};
use crate::error::ParleyError;

use client_core::Messenger;
use client_core::routing::{MESSAGES_PATH, Route, SEND_MESSAGE_PATH, View, navigate};

use models::OutgoingMessageBuilder;

use log::info;

pub async fn users(messenger: &Messenger) -> Result<String, ParleyError> {
    open(messenger, SEND_MESSAGE_PATH).await
}

pub async fn messages(messenger: &Messenger) -> Result<String, ParleyError> {
    open(messenger, MESSAGES_PATH).await
}

/// Send through the send-message route, then land on the message list.
///
/// An anonymous session is redirected to the login view and nothing is sent.
pub async fn send(
    messenger: &Messenger,
    recipient: &str,
    message: &str,
) -> Result<String, ParleyError> {
    let outgoing = OutgoingMessageBuilder::default()
        .with_recipient(recipient)
        .with_message(message)
        .build()?;

    let route = Route::SendMessageTo(outgoing.message_token().to_string());
    let session = messenger.session().await;
    if !matches!(navigate(&route.path(), &session).view, View::SendMessageForm { .. }) {
        info!("Not logged in, message not sent");
        return open(messenger, &route.path()).await;
    }

    messenger.send_message(&outgoing).await?;

    let view = land(messenger, MESSAGES_PATH).await?;
    Ok(format!("Message sent.\n{view}"))
}
