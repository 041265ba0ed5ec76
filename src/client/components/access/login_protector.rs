use dioxus::prelude::*;

use crate::client::store::access::{self, Access, Capability};
use crate::client::store::session::SessionState;

/// Renders its children only for an authenticated user.
///
/// Denial is a silent redirect to the landing path, never an error display.
/// Until the initial session lookup resolves nothing is rendered, so a page
/// reload on a protected route does not bounce a logged-in user.
#[component]
pub fn WithLoginRequired(children: Element) -> Element {
    let session_store = use_context::<Store<SessionState>>();
    let session = session_store.read();

    if !session.fetched {
        return rsx!( div {} );
    }

    match access::check(&session, Capability::Member) {
        Access::Allow => rsx!({ children }),
        Access::Deny => {
            navigator().replace("/");
            rsx!( div {} )
        }
    }
}
