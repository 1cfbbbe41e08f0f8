use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    dto::{api::ErrorDto, stats::StatsDto},
    error::AppError,
    middleware::auth::AuthGuard,
    service::stats::StatsService,
    state::AppState,
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Get admin dashboard counters.
///
/// Returns the number of requests still in the NEW status and the total
/// number of dogs on record.
///
/// # Access Control
/// - Requires a valid bearer token
#[utoipa::path(
    get,
    path = "/stats",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Dashboard counters", body = StatsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret)
        .require(&headers)
        .await?;

    let stats = StatsService::new(&state.db).gather().await?;

    Ok(Json(stats.into_dto()))
}
