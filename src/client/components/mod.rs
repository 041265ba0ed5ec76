pub mod access;
pub mod footer;
pub mod login;
pub mod navbar;
pub mod page;
pub mod title;

pub use footer::Footer;
pub use login::LoginDialog;
pub use navbar::Navbar;
pub use page::Page;
pub use title::LibraryTitleButton;
