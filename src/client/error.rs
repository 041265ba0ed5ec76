//! Error types for the catalog client.
//!
//! Mirrors the wire contract of the catalog API: failed requests carry an
//! `ErrorDto` body when the server produced one, and plain text otherwise.

use thiserror::Error;

/// Error produced by a request to the catalog or authentication API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never reached the server (network failure, CORS, etc.).
    #[error("Failed to send request: {0}")]
    Transport(String),
    /// The response body could not be decoded into the expected DTO.
    #[error("Failed to parse response: {0}")]
    Decode(String),
    /// The server answered with a non-success status.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
}

/// Error produced by a login attempt.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    /// The authentication endpoint rejected the credentials.
    #[error("Invalid username or password")]
    InvalidCredentials,
    /// The login request itself failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}
