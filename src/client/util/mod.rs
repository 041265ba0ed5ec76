pub mod auth;
pub mod books;

#[cfg(feature = "web")]
use crate::client::error::ApiError;
#[cfg(feature = "web")]
use crate::model::api::ErrorDto;

/// Turns a non-success response into an `ApiError`.
///
/// Prefers the structured `ErrorDto` body the API sends for expected
/// failures; falls back to the raw body text otherwise.
#[cfg(feature = "web")]
pub(crate) async fn error_from_response(response: reqwasm::http::Response) -> ApiError {
    let status = response.status();

    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        ApiError::Status {
            status,
            message: error_dto.error,
        }
    } else {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        ApiError::Status {
            status,
            message: error_text,
        }
    }
}
