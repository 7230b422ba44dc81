//! Route-driven rendering: resolve a path, load what its view shows, render it.

use crate::error::ParleyError;
use crate::views;

use client_core::Messenger;
use client_core::routing::{Resolved, View, navigate};

use log::{debug, warn};

/// Navigate to `path` and render the view the router lands on.
///
/// Guarded paths redirect to the login view for an anonymous session.
/// Entering the login view clears the session error. A failed fetch fails
/// the command.
pub async fn open(messenger: &Messenger, path: &str) -> Result<String, ParleyError> {
    visit(messenger, path, true).await
}

/// Like [`open`], but a failed fetch is rendered inside the view instead.
///
/// Used after an action already succeeded, so its outcome is still reported.
pub async fn land(messenger: &Messenger, path: &str) -> Result<String, ParleyError> {
    visit(messenger, path, false).await
}

async fn visit(messenger: &Messenger, path: &str, strict: bool) -> Result<String, ParleyError> {
    let session = messenger.session().await;
    let Resolved { path, view } = navigate(path, &session);
    debug!("Rendering {view:?} at {path}");

    let loaded = match &view {
        View::Login => {
            messenger.clear_error().await?;
            Ok(())
        }
        View::MessageList => messenger.fetch_messages().await.map_err(ParleyError::from),
        View::UserPicker => messenger.fetch_users().await.map_err(ParleyError::from),
        View::Register | View::SendMessageForm { .. } => Ok(()),
    };

    if let Err(e) = loaded {
        if strict {
            return Err(e);
        }
        warn!("Rendering {path} with stale data: {}", e.user_message());
    }

    let state = messenger.snapshot().await;
    Ok(views::render(
        &path,
        &view,
        &state.session,
        &state.directory,
        &state.messages,
    ))
}
