use dioxus::prelude::*;

use crate::client::components::{Footer, LibraryTitleButton, LoginDialog};
use crate::client::router::Route;
use crate::client::store::session::{self, SessionState};
use crate::model::auth::SessionUserDto;

/// Layout shell around every route: top bar, routed content, footer, and the
/// login dialog.
///
/// Watches the session store and navigates when the authenticated identity
/// actually changes, so logging in or out moves the user to the right
/// landing screen without hijacking an ordinary page load.
#[component]
pub fn Navbar() -> Element {
    let session_store = use_context::<Store<SessionState>>();
    let login_open = use_signal(|| false);
    let mut menu_open = use_signal(|| false);
    let nav = navigator();

    let mut last_identity = use_signal(|| None::<Option<SessionUserDto>>);
    use_effect(move || {
        let session = session_store.read();
        if !session.fetched {
            return;
        }

        let identity = session.user.clone();
        let previous = last_identity.peek().clone();
        match previous {
            None => last_identity.set(Some(identity)),
            Some(previous) if previous != identity => {
                last_identity.set(Some(identity));
                if let Some(path) = session::post_auth_path(&session) {
                    nav.push(path);
                }
            }
            Some(_) => (),
        }
    });

    let on_logout = move |_| {
        menu_open.set(false);

        #[cfg(feature = "web")]
        {
            let store = session_store;
            spawn(async move {
                session::logout(store).await;
            });
        }
    };

    let session = session_store.read();
    let avatar = session
        .user
        .as_ref()
        .map(|user| avatar_initial(&user.username));

    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                LibraryTitleButton {}
            }
            div {
                class: "navbar-end",
                if let Some(initial) = avatar {
                    div { class: "relative",
                        button {
                            class: "btn btn-circle avatar placeholder",
                            onclick: move |_| {
                                let was_open = *menu_open.peek();
                                menu_open.set(!was_open);
                            },
                            div { class: "bg-neutral text-neutral-content rounded-full w-10",
                                span { "{initial}" }
                            }
                        }
                        if menu_open() {
                            ul {
                                class: "menu bg-base-100 rounded-box shadow absolute right-0 mt-2 w-40 z-10",
                                li {
                                    Link {
                                        to: Route::BooksList {},
                                        onclick: move |_| menu_open.set(false),
                                        "Dashboard"
                                    }
                                }
                                li {
                                    button {
                                        onclick: on_logout,
                                        "Logout"
                                    }
                                }
                            }
                        }
                    }
                } else if session.fetched {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            let mut login_open = login_open;
                            login_open.set(true);
                        },
                        "Login"
                    }
                }
            }
        }

        Outlet::<Route> {}

        Footer {}

        LoginDialog { open: login_open }
    }
}

/// First letter of the username, uppercased, for the avatar badge.
fn avatar_initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::avatar_initial;

    /// Tests the avatar badge letter.
    ///
    /// Expected: first character, uppercased; "?" for an empty name
    #[test]
    fn uppercases_first_letter() {
        assert_eq!(avatar_initial("zaid"), "Z");
        assert_eq!(avatar_initial("Éloise"), "É");
        assert_eq!(avatar_initial(""), "?");
    }
}
