//! Text renderings of each client view.
//!
//! Views are pure functions of state snapshots; commands fetch first, then render.

use client_core::config::{AppConfig, ParleyPaths};
use client_core::routing::View;

use models::{MessageList, Session, UserDirectory};

const LOGIN_HINT: &str = "Log in with: parley login <username> <password>";
const REGISTER_HINT: &str = "Register with: parley register <username> <password>";

/// Header line naming the path a view was reached at.
pub fn heading(path: &str) -> String {
    format!("[{path}]")
}

pub fn login_view(session: &Session) -> String {
    let mut lines = vec![String::from("Login")];
    if let Some(error) = session.error() {
        lines.push(format!("Error: {error}"));
    }
    lines.push(String::from(LOGIN_HINT));
    lines.push(String::from("No account yet? ") + REGISTER_HINT);
    lines.join("\n")
}

pub fn register_view(session: &Session) -> String {
    let mut lines = vec![String::from("Register")];
    if let Some(error) = session.error() {
        lines.push(format!("Error: {error}"));
    }
    lines.push(String::from(REGISTER_HINT));
    lines.join("\n")
}

/// Messages in server order.
pub fn message_list_view(list: &MessageList) -> String {
    let mut lines = vec![String::from("Messages")];
    if let Some(error) = &list.error {
        lines.push(format!("Error: {error}"));
    }

    if list.messages.is_empty() {
        lines.push(String::from("No messages."));
    } else {
        lines.extend(
            list.messages
                .iter()
                .map(|m| format!("#{} {}: {}", m.id, m.from, m.message)),
        );
    }
    lines.join("\n")
}

/// Directory of recipients with the command to message each.
pub fn user_picker_view(directory: &UserDirectory) -> String {
    let mut lines = vec![String::from("Users")];
    if let Some(error) = &directory.error {
        lines.push(format!("Error: {error}"));
    }

    if directory.users.is_empty() {
        lines.push(String::from("No users."));
    } else {
        lines.extend(directory.users.iter().map(|user| {
            format!(
                "{}  (parley send {} <message>)",
                user.username, user.message_token
            )
        }));
    }
    lines.join("\n")
}

/// The recipient is shown by username when the directory knows it.
pub fn send_form_view(recipient: &str, directory: &UserDirectory) -> String {
    let name = directory
        .find_by_message_token(recipient)
        .map(|user| user.username.as_str())
        .unwrap_or(recipient);

    [
        format!("Send message to {name}"),
        format!("Send with: parley send {recipient} <message>"),
    ]
    .join("\n")
}

/// Session and connection summary. The token is never shown in full.
pub fn status_view(session: &Session, base_url: &str, paths: &ParleyPaths) -> String {
    let session_line = match session.token() {
        Some(token) => format!("Session: authenticated (token {})", token.hint()),
        None => String::from("Session: anonymous"),
    };

    [
        format!("Server: {base_url}"),
        session_line,
        format!("Data directory: {} ({})", paths.data_dir.display(), paths.source),
        format!("Config directory: {}", paths.config_dir.display()),
    ]
    .join("\n")
}

/// Config file contents, marked as saved or as currently in effect.
pub fn config_view(config: &AppConfig, saved: bool) -> String {
    let timeout = match config.server.request_timeout_secs {
        Some(secs) => format!("{secs}s"),
        None => String::from("none"),
    };

    [
        String::from(if saved { "Config saved" } else { "Config" }),
        format!("Server: {}", config.server.base_url),
        format!("Request timeout: {timeout}"),
        format!("Store file: {}", config.storage.store_file),
    ]
    .join("\n")
}

/// Render `view` from the current snapshots.
pub fn render(
    path: &str,
    view: &View,
    session: &Session,
    directory: &UserDirectory,
    messages: &MessageList,
) -> String {
    let body = match view {
        View::Login => login_view(session),
        View::Register => register_view(session),
        View::MessageList => message_list_view(messages),
        View::UserPicker => user_picker_view(directory),
        View::SendMessageForm { recipient } => send_form_view(recipient, directory),
    };
    format!("{}\n{body}", heading(path))
}
