use serde::{Deserialize, Serialize};

/// The authenticated user as reported by the authentication endpoint.
///
/// The admin flag lives on the user rather than beside it so that an
/// admin session without a user cannot be represented.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUserDto {
    pub username: String,
    pub is_admin: bool,
}

/// Credentials submitted to the authentication endpoint.
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}
