use dioxus::prelude::*;

use crate::client::router::Route;
use crate::client::store::session::SessionState;

/// Application root: provides the session store and mounts the router.
#[component]
pub fn App() -> Element {
    let session_store = use_store(SessionState::default);
    use_context_provider(|| session_store);

    // Resolve the current session once on load; guards and the shell hold
    // off until `fetched` flips.
    #[cfg(feature = "web")]
    {
        use dioxus_logger::tracing;

        let mut store = session_store;
        use_future(move || async move {
            match crate::client::util::auth::get_session().await {
                Ok(user) => {
                    let mut session = store.write();
                    session.user = user;
                    session.fetched = true;
                }
                Err(err) => {
                    tracing::error!("failed to resolve session: {err}");
                    store.write().fetched = true;
                }
            }
        });
    }

    rsx! {
        Router::<Route> {}
    }
}
