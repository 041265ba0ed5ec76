#[cfg(feature = "web")]
use crate::client::error::ApiError;
#[cfg(feature = "web")]
use crate::client::util::error_from_response;
#[cfg(feature = "web")]
use crate::model::book::{BookDto, CreateBookDto};

/// Retrieve all books in the catalog from the API
#[cfg(feature = "web")]
pub async fn get_books() -> Result<Vec<BookDto>, ApiError> {
    use reqwasm::http::Request;

    let response = Request::get("/api/books")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    match response.status() {
        200 => {
            let books = response
                .json::<Vec<BookDto>>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(books)
        }
        404 => Ok(Vec::new()),
        _ => Err(error_from_response(response).await),
    }
}

/// Retrieve a single book by ISBN from the API
#[cfg(feature = "web")]
pub async fn get_book(isbn: &str) -> Result<BookDto, ApiError> {
    use reqwasm::http::Request;

    let response = Request::get(&format!("/api/books/{isbn}"))
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    match response.status() {
        200 => response
            .json::<BookDto>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string())),
        _ => Err(error_from_response(response).await),
    }
}

/// Create a new book record via the API
#[cfg(feature = "web")]
pub async fn create_book(book: &CreateBookDto) -> Result<BookDto, ApiError> {
    use reqwasm::http::Request;

    let body = serde_json::to_string(book).map_err(|e| ApiError::Decode(e.to_string()))?;

    let response = Request::post("/api/books")
        .header("Content-Type", "application/json")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .body(body)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    match response.status() {
        200 | 201 => response
            .json::<BookDto>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string())),
        _ => Err(error_from_response(response).await),
    }
}

/// Update an existing book record via the API
#[cfg(feature = "web")]
pub async fn update_book(isbn: &str, book: &CreateBookDto) -> Result<BookDto, ApiError> {
    use reqwasm::http::Request;

    let body = serde_json::to_string(book).map_err(|e| ApiError::Decode(e.to_string()))?;

    let response = Request::put(&format!("/api/books/{isbn}"))
        .header("Content-Type", "application/json")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .body(body)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    match response.status() {
        200 => response
            .json::<BookDto>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string())),
        _ => Err(error_from_response(response).await),
    }
}

/// Delete a book record via the API
#[cfg(feature = "web")]
pub async fn delete_book(isbn: &str) -> Result<(), ApiError> {
    use reqwasm::http::Request;

    let response = Request::delete(&format!("/api/books/{isbn}"))
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    match response.status() {
        200 | 204 => Ok(()),
        _ => Err(error_from_response(response).await),
    }
}
