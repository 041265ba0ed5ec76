use serde::{Deserialize, Serialize};

/// A book record as returned by the catalog API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub quantity: u32,
    pub available: u32,
    pub price: f64,
}

/// Payload for creating or updating a book record.
///
/// Availability is derived server-side from lending activity, so the
/// form never submits it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateBookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub quantity: u32,
    pub price: f64,
}
