use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPenToSquare, FaPlus, FaTrash};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::session::SessionState;
use crate::model::book::BookDto;

#[component]
pub fn BooksList() -> Element {
    let session_store = use_context::<Store<SessionState>>();
    let mut books = use_signal(Vec::<BookDto>::new);
    let mut load_error = use_signal(|| None::<String>);
    let mut refresh = use_signal(|| 0u32);

    // Retrieve the catalog on load and again after every deletion
    #[cfg(feature = "web")]
    {
        let future = use_resource(move || {
            refresh.read();
            async move { crate::client::util::books::get_books().await }
        });

        match &*future.read_unchecked() {
            Some(Ok(list)) => {
                if *books.peek() != *list {
                    books.set(list.clone());
                }
            }
            Some(Err(err)) => {
                tracing::error!("failed to load catalog: {err}");
                load_error.set(Some(err.to_string()));
            }
            None => (),
        }
    }

    let on_delete = move |isbn: String| {
        #[cfg(feature = "web")]
        spawn(async move {
            match crate::client::util::books::delete_book(&isbn).await {
                Ok(()) => refresh += 1,
                Err(err) => {
                    tracing::error!("failed to delete book {isbn}: {err}");
                    load_error.set(Some(err.to_string()));
                }
            }
        });

        #[cfg(not(feature = "web"))]
        let _ = isbn;
    };

    let is_admin = session_store.read().is_admin();

    rsx!(
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1024px] flex flex-col gap-4",
                div { class: "flex justify-between items-center",
                    h1 { class: "text-2xl font-bold",
                        "Catalog"
                    }
                    if is_admin {
                        Link {
                            to: Route::BookAdd {},
                            button { class: "btn btn-primary flex gap-2",
                                Icon {
                                    width: 20,
                                    height: 20,
                                    icon: FaPlus
                                }
                                p { "Add Book" }
                            }
                        }
                    }
                }
                if let Some(message) = load_error() {
                    p { class: "text-error",
                        "{message}"
                    }
                }
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "Title" }
                                th { "Author" }
                                th { "Category" }
                                th { "Available" }
                                if is_admin {
                                    th { "" }
                                }
                            }
                        }
                        tbody {
                            {books.iter().map(|book| {
                                let isbn = book.isbn.clone();
                                let edit_isbn = book.isbn.clone();
                                rsx! {
                                    tr {
                                        td {
                                            Link {
                                                to: Route::BookDetail { isbn: book.isbn.clone() },
                                                "{book.title}"
                                            }
                                        }
                                        td { "{book.author}" }
                                        td { "{book.category}" }
                                        td { "{book.available} of {book.quantity}" }
                                        if is_admin {
                                            td {
                                                div { class: "flex gap-2",
                                                    Link {
                                                        to: Route::BookEdit { isbn: edit_isbn.clone() },
                                                        button { class: "btn btn-ghost btn-sm",
                                                            Icon {
                                                                width: 16,
                                                                height: 16,
                                                                icon: FaPenToSquare
                                                            }
                                                        }
                                                    }
                                                    button {
                                                        class: "btn btn-ghost btn-sm",
                                                        onclick: move |_| on_delete(isbn.clone()),
                                                        Icon {
                                                            width: 16,
                                                            height: 16,
                                                            icon: FaTrash
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            })}
                        }
                    }
                }
            }
        }
    )
}
