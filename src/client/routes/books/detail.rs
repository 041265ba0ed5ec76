use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPenToSquare;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::components::access::WithLoginRequired;
use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::session::SessionState;
use crate::model::book::BookDto;

#[component]
pub fn BookDetail(isbn: String) -> Element {
    rsx!(
        WithLoginRequired {
            BookView { isbn }
        }
    )
}

#[component]
fn BookView(isbn: String) -> Element {
    let session_store = use_context::<Store<SessionState>>();
    let mut book = use_signal(|| None::<BookDto>);
    let mut load_error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    {
        let fetch_isbn = isbn.clone();
        let future = use_resource(move || {
            let fetch_isbn = fetch_isbn.clone();
            async move { crate::client::util::books::get_book(&fetch_isbn).await }
        });

        match &*future.read_unchecked() {
            Some(Ok(dto)) => {
                if book.peek().as_ref() != Some(dto) {
                    book.set(Some(dto.clone()));
                }
            }
            Some(Err(err)) => {
                tracing::error!("failed to load book {isbn}: {err}");
                load_error.set(Some(err.to_string()));
            }
            None => (),
        }
    }

    let is_admin = session_store.read().is_admin();

    rsx!(
        Page { class: "flex flex-col items-center",
            div { class: "card shadow-sm w-full max-w-[640px]",
                div { class: "card-body",
                    if let Some(message) = load_error() {
                        p { class: "text-error",
                            "{message}"
                        }
                    } else if let Some(book) = book() {
                        div { class: "flex justify-between items-start",
                            h2 { class: "card-title",
                                "{book.title}"
                            }
                            if is_admin {
                                Link {
                                    to: Route::BookEdit { isbn: book.isbn.clone() },
                                    button { class: "btn btn-ghost btn-sm flex gap-2",
                                        Icon {
                                            width: 16,
                                            height: 16,
                                            icon: FaPenToSquare
                                        }
                                        p { "Edit" }
                                    }
                                }
                            }
                        }
                        ul { class: "flex flex-col gap-1",
                            li { "Author: {book.author}" }
                            li { "ISBN: {book.isbn}" }
                            li { "Category: {book.category}" }
                            li { "Price: {book.price}" }
                            li { "Available: {book.available} of {book.quantity}" }
                        }
                    } else {
                        div { class: "skeleton h-6 w-40" }
                        div { class: "skeleton h-32 w-full mt-2" }
                    }
                }
            }
        }
    )
}
