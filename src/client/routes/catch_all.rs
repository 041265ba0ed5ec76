use dioxus::prelude::*;

use crate::client::router::Route;

/// Every path outside the route table resolves here.
pub(crate) fn fallback() -> Route {
    Route::BooksList {}
}

#[component]
pub fn CatchAll(segments: Vec<String>) -> Element {
    navigator().replace(fallback());

    rsx!( div {} )
}
