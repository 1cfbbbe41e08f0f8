use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on a protected route.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token failed signature verification, was malformed, or has expired.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Token verified but its subject does not resolve to a stored user.
    #[error("Token subject {0} does not match any user")]
    UnknownSubject(i32),

    /// Login attempt with a wrong username or password.
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant maps to 401 Unauthorized. Client-facing messages stay
/// generic; the precise cause is logged at debug level for diagnostics.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Auth failure: {}", self);

        let message = match self {
            Self::InvalidCredentials => "Invalid username or password",
            _ => "Could not validate credentials",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
