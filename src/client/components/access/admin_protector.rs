use dioxus::prelude::*;

use crate::client::router::Route;
use crate::client::store::access::{self, Access, Capability};
use crate::client::store::session::SessionState;

/// Renders its children only for an admin user.
///
/// Composes under `WithLoginRequired`; a logged-in non-admin user is sent
/// back to the catalog list rather than shown an error.
#[component]
pub fn WithAdminRequired(children: Element) -> Element {
    let session_store = use_context::<Store<SessionState>>();
    let session = session_store.read();

    if !session.fetched {
        return rsx!( div {} );
    }

    match access::check(&session, Capability::Admin) {
        Access::Allow => rsx!({ children }),
        Access::Deny => {
            navigator().replace(Route::BooksList {});
            rsx!( div {} )
        }
    }
}
