use crate::error::ParleyError;
use crate::views;

use client_core::Messenger;
use client_core::config::ParleyPaths;

/// Local state only; no request is made.
pub async fn status(messenger: &Messenger, paths: &ParleyPaths) -> Result<String, ParleyError> {
    let session = messenger.session().await;
    Ok(views::status_view(
        &session,
        messenger.gateway().base_url().as_str(),
        paths,
    ))
}
