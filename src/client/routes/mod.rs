pub mod books;
pub mod catch_all;

pub use books::{BookAdd, BookDetail, BookEdit, BooksList};
pub use catch_all::CatchAll;
