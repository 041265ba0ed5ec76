mod check_access;
mod post_auth_path;

use crate::client::store::session::SessionState;
use crate::model::auth::SessionUserDto;

/// A resolved session with the given user.
pub fn session_with(user: Option<SessionUserDto>) -> SessionState {
    SessionState {
        user,
        fetched: true,
    }
}

pub fn member() -> SessionUserDto {
    SessionUserDto {
        username: "reader".to_string(),
        is_admin: false,
    }
}

pub fn admin() -> SessionUserDto {
    SessionUserDto {
        username: "librarian".to_string(),
        is_admin: true,
    }
}
