use dioxus::prelude::*;

use crate::client::store::session::SessionState;

/// Modal credential form.
///
/// A failed login keeps the dialog open with the error message; a successful
/// one closes it and lets the shell react to the session change.
#[component]
pub fn LoginDialog(open: Signal<bool>) -> Element {
    let session_store = use_context::<Store<SessionState>>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_message = use_signal(|| None::<String>);

    let close = move |_| {
        let mut open = open;
        open.set(false);
        username.set(String::new());
        password.set(String::new());
        error_message.set(None);
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            let user_input = username.peek().clone();
            let pass_input = password.peek().clone();
            let store = session_store;
            let mut open = open;

            spawn(async move {
                match crate::client::store::session::login(store, user_input, pass_input).await {
                    Ok(()) => {
                        open.set(false);
                        username.set(String::new());
                        password.set(String::new());
                        error_message.set(None);
                    }
                    Err(err) => {
                        error_message.set(Some(err.to_string()));
                    }
                }
            });
        }
    };

    if !open() {
        return rsx!( div {} );
    }

    rsx!(
        div {
            class: "modal modal-open",
            div {
                class: "modal-box",
                h2 { class: "text-lg font-bold",
                    "Login"
                }
                form {
                    class: "flex flex-col gap-4 pt-4",
                    onsubmit: on_submit,
                    input {
                        class: "input input-bordered w-full",
                        r#type: "text",
                        placeholder: "Username",
                        value: "{username}",
                        oninput: move |evt| username.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    if let Some(message) = error_message() {
                        p { class: "text-error",
                            "{message}"
                        }
                    }
                    div {
                        class: "modal-action",
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: close,
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            "Login"
                        }
                    }
                }
            }
        }
    )
}
