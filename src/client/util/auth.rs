#[cfg(feature = "web")]
use crate::client::error::{ApiError, AuthError};
#[cfg(feature = "web")]
use crate::client::util::error_from_response;
#[cfg(feature = "web")]
use crate::model::auth::{LoginDto, SessionUserDto};

/// Retrieve the current session from the API, if one exists
#[cfg(feature = "web")]
pub async fn get_session() -> Result<Option<SessionUserDto>, ApiError> {
    use reqwasm::http::Request;

    let response = Request::get("/api/auth/session")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    match response.status() {
        200 => {
            let user = response
                .json::<SessionUserDto>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(Some(user))
        }
        401 | 404 => Ok(None),
        _ => Err(error_from_response(response).await),
    }
}

/// Exchange credentials for a session cookie and the session user
#[cfg(feature = "web")]
pub async fn login(username: String, password: String) -> Result<SessionUserDto, AuthError> {
    use reqwasm::http::Request;

    let body = serde_json::to_string(&LoginDto { username, password })
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    let response = Request::post("/api/auth/login")
        .header("Content-Type", "application/json")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .body(body)
        .send()
        .await
        .map_err(|e| AuthError::Api(ApiError::Transport(e.to_string())))?;

    match response.status() {
        200 => {
            let user = response
                .json::<SessionUserDto>()
                .await
                .map_err(|e| AuthError::Api(ApiError::Decode(e.to_string())))?;
            Ok(user)
        }
        401 => Err(AuthError::InvalidCredentials),
        _ => Err(error_from_response(response).await.into()),
    }
}

/// End the current session server-side
#[cfg(feature = "web")]
pub async fn logout() -> Result<(), ApiError> {
    use reqwasm::http::Request;

    let response = Request::post("/api/auth/logout")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    match response.status() {
        200 | 204 => Ok(()),
        _ => Err(error_from_response(response).await),
    }
}
