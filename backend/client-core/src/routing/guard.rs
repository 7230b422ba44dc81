//! Navigation-time authentication check.

use crate::routing::{LOGIN_PATH, Navigation, View};

use models::Session;

/// Whether `session` may enter a protected view.
///
/// Evaluated fresh on every navigation; nothing is cached.
#[inline]
pub fn permits(session: &Session) -> bool {
    session.is_authenticated()
}

/// A view that only renders for an authenticated session.
///
/// Instances are independent: several protected views evaluated against the
/// same session each reach their own verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Protected {
    view: View,
}

impl Protected {
    pub fn new(view: View) -> Self {
        Self { view }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Render the wrapped view, or redirect to the login view.
    pub fn evaluate(&self, session: &Session) -> Navigation {
        if permits(session) {
            Navigation::Render(self.view.clone())
        } else {
            Navigation::Redirect(LOGIN_PATH.to_string())
        }
    }
}
