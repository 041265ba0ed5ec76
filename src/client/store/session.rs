//! Client-side session state.
//!
//! A single `Store<SessionState>` is provided as context at the application
//! root; the navigation shell and the route guards read it, and only the
//! mutators in this module write it.

use crate::model::auth::SessionUserDto;

#[cfg(feature = "web")]
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::error::AuthError;

/// The current authentication state of the client.
///
/// `fetched` is false until the initial session lookup against the API has
/// resolved; guards and the shell hold off on redirects until then.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<SessionUserDto>,
    pub fetched: bool,
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.is_admin)
    }
}

/// Where the shell should navigate after the authenticated identity changes.
///
/// Returns `None` until the session has been resolved. Logging out lands on
/// the root path, a member login lands on the catalog list, and an admin
/// login lands on the admin catalog root.
pub fn post_auth_path(session: &SessionState) -> Option<&'static str> {
    if !session.fetched {
        return None;
    }

    match &session.user {
        None => Some("/"),
        Some(user) if user.is_admin => Some("/admin/books/"),
        Some(_) => Some("/books"),
    }
}

/// Exchanges credentials for a session and writes the user into the store.
///
/// On failure the store is left untouched so the login dialog can stay open
/// and report the error.
#[cfg(feature = "web")]
pub async fn login(
    mut store: Store<SessionState>,
    username: String,
    password: String,
) -> Result<(), AuthError> {
    let user = crate::client::util::auth::login(username, password).await?;

    let mut session = store.write();
    session.user = Some(user);
    session.fetched = true;

    Ok(())
}

/// Ends the session server-side and clears the stored user.
///
/// The local session is cleared even if the logout request fails; the worst
/// case is an orphaned server session that expires on its own.
#[cfg(feature = "web")]
pub async fn logout(mut store: Store<SessionState>) {
    if let Err(err) = crate::client::util::auth::logout().await {
        tracing::error!("logout request failed: {err}");
    }

    store.write().user = None;
}
