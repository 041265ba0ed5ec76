pub mod login_dialog;

pub use login_dialog::LoginDialog;
