//! Client-side routes.
//!
//! | Path | Target |
//! |---|---|
//! | `/login` | login view |
//! | `/register` | registration view |
//! | `/messages` | message list (guarded) |
//! | `/send-message` | recipient picker (guarded) |
//! | `/send-message/{recipientToken}` | send form (guarded) |
//! | `/` | `/messages` when authenticated, else `/login` |
//! | anything else | `/` |

pub mod guard;

pub use guard::{Protected, permits};

use models::Session;

use log::{debug, warn};

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const MESSAGES_PATH: &str = "/messages";
pub const SEND_MESSAGE_PATH: &str = "/send-message";

/// Longest redirect chain the table can produce is `/x -> / -> /login`.
const MAX_REDIRECTS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Messages,
    SendMessage,
    SendMessageTo(String),
    Root,
    NotFound(String),
}

impl Route {
    /// Match a path against the route table.
    ///
    /// Query strings, fragments and trailing slashes are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Route::Root,
            LOGIN_PATH => Route::Login,
            REGISTER_PATH => Route::Register,
            MESSAGES_PATH => Route::Messages,
            SEND_MESSAGE_PATH => Route::SendMessage,
            other => match other
                .strip_prefix(SEND_MESSAGE_PATH)
                .and_then(|rest| rest.strip_prefix('/'))
            {
                Some(token) if !token.is_empty() && !token.contains('/') => {
                    Route::SendMessageTo(token.to_string())
                }
                _ => Route::NotFound(path.to_string()),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => LOGIN_PATH.to_string(),
            Route::Register => REGISTER_PATH.to_string(),
            Route::Messages => MESSAGES_PATH.to_string(),
            Route::SendMessage => SEND_MESSAGE_PATH.to_string(),
            Route::SendMessageTo(token) => format!("{SEND_MESSAGE_PATH}/{token}"),
            Route::Root => ROOT_PATH.to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }
}

/// What a route renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Login,
    Register,
    MessageList,
    /// Directory of users to pick a recipient from.
    UserPicker,
    SendMessageForm { recipient: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(View),
    Redirect(String),
}

/// Final location after following redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub path: String,
    pub view: View,
}

/// One routing step for `path` under `session`.
pub fn resolve(path: &str, session: &Session) -> Navigation {
    match Route::parse(path) {
        Route::Login => Navigation::Render(View::Login),
        Route::Register => Navigation::Render(View::Register),
        Route::Messages => Protected::new(View::MessageList).evaluate(session),
        Route::SendMessage => Protected::new(View::UserPicker).evaluate(session),
        Route::SendMessageTo(recipient) => {
            Protected::new(View::SendMessageForm { recipient }).evaluate(session)
        }
        Route::Root if session.is_authenticated() => {
            Navigation::Redirect(MESSAGES_PATH.to_string())
        }
        Route::Root => Navigation::Redirect(LOGIN_PATH.to_string()),
        Route::NotFound(_) => Navigation::Redirect(ROOT_PATH.to_string()),
    }
}

/// Follow redirects from `path` until a view renders.
pub fn navigate(path: &str, session: &Session) -> Resolved {
    let mut current = path.to_string();

    for _ in 0..=MAX_REDIRECTS {
        match resolve(&current, session) {
            Navigation::Render(view) => {
                return Resolved {
                    path: Route::parse(&current).path(),
                    view,
                };
            }
            Navigation::Redirect(target) => {
                debug!("Redirect {current} -> {target}");
                current = target;
            }
        }
    }

    warn!("Redirect limit reached navigating to {path}, falling back to login");
    Resolved {
        path: LOGIN_PATH.to_string(),
        view: View::Login,
    }
}
