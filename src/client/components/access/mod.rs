pub mod admin_protector;
pub mod login_protector;

pub use admin_protector::WithAdminRequired;
pub use login_protector::WithLoginRequired;
