use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::{ErrorDto, MessageDto},
        tag::{TagDto, TagUpsertDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    service::tag::TagService,
    state::AppState,
};

/// Tag for grouping tag endpoints in OpenAPI documentation
pub static TAG_TAG: &str = "tags";

/// Create a new tag.
///
/// # Access Control
/// - Requires a valid bearer token
///
/// # Returns
/// - `201 Created` - The created tag
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/tags",
    tag = TAG_TAG,
    request_body = TagUpsertDto,
    responses(
        (status = 201, description = "Successfully created tag", body = TagDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<TagUpsertDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret)
        .require(&headers)
        .await?;

    let tag = TagService::new(&state.db)
        .create(payload.into_params())
        .await?;

    Ok((StatusCode::CREATED, Json(tag.into_dto())))
}

/// List all tags.
#[utoipa::path(
    get,
    path = "/tags",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "All tags ordered by id", body = Vec<TagDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tags(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tags = TagService::new(&state.db).get_all().await?;

    Ok(Json(
        tags.into_iter().map(|tag| tag.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Get a single tag.
#[utoipa::path(
    get,
    path = "/tags/{id}",
    tag = TAG_TAG,
    params(("id" = i32, Path, description = "Tag id")),
    responses(
        (status = 200, description = "The tag", body = TagDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tag(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let tag = TagService::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Tag {id} not found")))?;

    Ok(Json(tag.into_dto()))
}

/// Rename a tag.
///
/// # Access Control
/// - Requires a valid bearer token
#[utoipa::path(
    put,
    path = "/tags/{id}",
    tag = TAG_TAG,
    params(("id" = i32, Path, description = "Tag id")),
    request_body = TagUpsertDto,
    responses(
        (status = 200, description = "The updated tag", body = TagDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<TagUpsertDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret)
        .require(&headers)
        .await?;

    let tag = TagService::new(&state.db)
        .update(id, payload.into_params())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Tag {id} not found")))?;

    Ok(Json(tag.into_dto()))
}

/// Delete a tag.
///
/// Removes the tag and its associations; the dogs and news that carried it
/// are untouched.
///
/// # Access Control
/// - Requires a valid bearer token
#[utoipa::path(
    delete,
    path = "/tags/{id}",
    tag = TAG_TAG,
    params(("id" = i32, Path, description = "Tag id")),
    responses(
        (status = 200, description = "Tag deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret)
        .require(&headers)
        .await?;

    let deleted = TagService::new(&state.db).delete(id).await?;

    if !deleted {
        return Err(AppError::NotFound(format!("Tag {id} not found")));
    }

    Ok(Json(MessageDto {
        message: "Tag deleted".to_string(),
    }))
}
