use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    dto::{
        api::ErrorDto,
        auth::{LoginDto, TokenDto},
    },
    error::AppError,
    service::auth::AuthService,
    state::AppState,
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with username and password.
///
/// Verifies the credentials against the stored password hash and returns a
/// bearer token valid for 30 minutes. Unknown usernames and wrong passwords
/// are indistinguishable in the response.
///
/// # Returns
/// - `200 OK` - Access token
/// - `401 Unauthorized` - Invalid credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully authenticated", body = TokenDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let access_token = AuthService::new(&state.db, &state.jwt_secret)
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(TokenDto {
        access_token,
        token_type: "bearer".to_string(),
    }))
}
