use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::components::access::{WithAdminRequired, WithLoginRequired};
use crate::client::components::Page;
use crate::client::router::Route;
use crate::model::book::CreateBookDto;

#[component]
pub fn BookAdd() -> Element {
    rsx!(
        WithLoginRequired {
            WithAdminRequired {
                BookForm {}
            }
        }
    )
}

#[component]
pub fn BookEdit(isbn: String) -> Element {
    rsx!(
        WithLoginRequired {
            WithAdminRequired {
                BookForm { isbn }
            }
        }
    )
}

/// Create/edit form for a book record.
///
/// With an ISBN the form edits the existing record (prefilled from the API,
/// ISBN locked since it is the record id); without one it creates a new
/// record.
#[component]
fn BookForm(isbn: Option<String>) -> Element {
    let mut isbn_field = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut author = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut quantity = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut form_error = use_signal(|| None::<String>);
    let mut loaded = use_signal(|| false);

    let editing = isbn.is_some();
    let nav = navigator();

    // Prefill from the API once when editing
    #[cfg(feature = "web")]
    if let Some(book_isbn) = isbn.clone() {
        let future = use_resource(move || {
            let book_isbn = book_isbn.clone();
            async move { crate::client::util::books::get_book(&book_isbn).await }
        });

        match &*future.read_unchecked() {
            Some(Ok(book)) => {
                if !*loaded.peek() {
                    isbn_field.set(book.isbn.clone());
                    title.set(book.title.clone());
                    author.set(book.author.clone());
                    category.set(book.category.clone());
                    quantity.set(book.quantity.to_string());
                    price.set(book.price.to_string());
                    loaded.set(true);
                }
            }
            Some(Err(err)) => {
                tracing::error!("failed to load book for editing: {err}");
                form_error.set(Some(err.to_string()));
            }
            None => (),
        }
    }

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let payload = build_payload(
            isbn_field.peek().as_str(),
            title.peek().as_str(),
            author.peek().as_str(),
            category.peek().as_str(),
            quantity.peek().as_str(),
            price.peek().as_str(),
        );

        match payload {
            Ok(payload) => {
                form_error.set(None);

                #[cfg(feature = "web")]
                spawn(async move {
                    let result = if editing {
                        crate::client::util::books::update_book(&payload.isbn, &payload).await
                    } else {
                        crate::client::util::books::create_book(&payload).await
                    };

                    match result {
                        Ok(book) => {
                            nav.push(Route::BookDetail { isbn: book.isbn });
                        }
                        Err(err) => {
                            tracing::error!("failed to save book: {err}");
                            form_error.set(Some(err.to_string()));
                        }
                    }
                });

                #[cfg(not(feature = "web"))]
                let _ = payload;
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    let heading = if editing { "Edit Book" } else { "Add Book" };

    rsx!(
        Page { class: "flex flex-col items-center",
            div { class: "card shadow-sm w-full max-w-[640px]",
                div { class: "card-body",
                    h2 { class: "card-title",
                        "{heading}"
                    }
                    form {
                        class: "flex flex-col gap-4",
                        onsubmit: on_submit,
                        input {
                            class: "input input-bordered w-full",
                            r#type: "text",
                            placeholder: "ISBN",
                            value: "{isbn_field}",
                            readonly: editing,
                            oninput: move |evt| isbn_field.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "text",
                            placeholder: "Title",
                            value: "{title}",
                            oninput: move |evt| title.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "text",
                            placeholder: "Author",
                            value: "{author}",
                            oninput: move |evt| author.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "text",
                            placeholder: "Category",
                            value: "{category}",
                            oninput: move |evt| category.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "text",
                            placeholder: "Quantity",
                            value: "{quantity}",
                            oninput: move |evt| quantity.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "text",
                            placeholder: "Price",
                            value: "{price}",
                            oninput: move |evt| price.set(evt.value()),
                        }
                        if let Some(message) = form_error() {
                            p { class: "text-error",
                                "{message}"
                            }
                        }
                        div { class: "flex justify-end",
                            button {
                                class: "btn btn-primary",
                                r#type: "submit",
                                if editing { "Save" } else { "Create" }
                            }
                        }
                    }
                }
            }
        }
    )
}

/// Validates the raw form fields and assembles the API payload.
///
/// Returns the first problem found as the message to show inline.
fn build_payload(
    isbn: &str,
    title: &str,
    author: &str,
    category: &str,
    quantity: &str,
    price: &str,
) -> Result<CreateBookDto, String> {
    let isbn = isbn.trim();
    if isbn.is_empty() {
        return Err("ISBN is required".to_string());
    }

    let title = title.trim();
    if title.is_empty() {
        return Err("Title is required".to_string());
    }

    let author = author.trim();
    if author.is_empty() {
        return Err("Author is required".to_string());
    }

    let quantity: u32 = quantity
        .trim()
        .parse()
        .map_err(|_| "Quantity must be a whole number".to_string())?;
    if quantity == 0 {
        return Err("Quantity must be at least 1".to_string());
    }

    let price: f64 = price
        .trim()
        .parse()
        .map_err(|_| "Price must be a number".to_string())?;
    if price < 0.0 {
        return Err("Price must not be negative".to_string());
    }

    Ok(CreateBookDto {
        isbn: isbn.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        category: category.trim().to_string(),
        quantity,
        price,
    })
}

#[cfg(test)]
mod tests {
    use super::build_payload;

    /// Tests assembling a payload from valid fields.
    ///
    /// Expected: trimmed fields, parsed quantity and price
    #[test]
    fn builds_payload_from_valid_fields() {
        let payload = build_payload(
            " 0316769487 ",
            "The Catcher in the Rye",
            "J. D. Salinger",
            "Fiction",
            "3",
            "9.99",
        )
        .unwrap();

        assert_eq!(payload.isbn, "0316769487");
        assert_eq!(payload.quantity, 3);
        assert_eq!(payload.price, 9.99);
    }

    /// Tests rejection of blank required fields.
    ///
    /// Expected: the first missing field is reported
    #[test]
    fn rejects_blank_required_fields() {
        let missing_isbn = build_payload("  ", "Title", "Author", "", "1", "1.0");
        assert_eq!(missing_isbn, Err("ISBN is required".to_string()));

        let missing_title = build_payload("1", "", "Author", "", "1", "1.0");
        assert_eq!(missing_title, Err("Title is required".to_string()));

        let missing_author = build_payload("1", "Title", " ", "", "1", "1.0");
        assert_eq!(missing_author, Err("Author is required".to_string()));
    }

    /// Tests rejection of non-numeric and non-positive quantities.
    ///
    /// Expected: parse failures and zero are both rejected
    #[test]
    fn rejects_bad_quantities() {
        let not_a_number = build_payload("1", "Title", "Author", "", "many", "1.0");
        assert_eq!(
            not_a_number,
            Err("Quantity must be a whole number".to_string())
        );

        let negative = build_payload("1", "Title", "Author", "", "-2", "1.0");
        assert_eq!(negative, Err("Quantity must be a whole number".to_string()));

        let zero = build_payload("1", "Title", "Author", "", "0", "1.0");
        assert_eq!(zero, Err("Quantity must be at least 1".to_string()));
    }

    /// Tests rejection of bad prices and acceptance of an empty category.
    ///
    /// Expected: negative price rejected; category is optional
    #[test]
    fn rejects_negative_price_and_allows_empty_category() {
        let negative = build_payload("1", "Title", "Author", "", "1", "-1.0");
        assert_eq!(negative, Err("Price must not be negative".to_string()));

        let payload = build_payload("1", "Title", "Author", "  ", "1", "0").unwrap();
        assert_eq!(payload.category, "");
        assert_eq!(payload.price, 0.0);
    }
}
