pub mod detail;
pub mod form;
pub mod list;

pub use detail::BookDetail;
pub use form::{BookAdd, BookEdit};
pub use list::BooksList;
