use axum::{
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::{ErrorDto, MessageDto},
        news::{NewsDto, NewsForm},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    service::news::NewsService,
    state::AppState,
};

/// Tag for grouping news endpoints in OpenAPI documentation
pub static NEWS_TAG: &str = "news";

/// Publish a news item.
///
/// Takes a multipart form with the news fields, an optional `image` file
/// part, and an optional `tag_ids` comma-delimited string. The author is
/// always the authenticated caller; the payload cannot name one.
///
/// # Access Control
/// - Requires a valid bearer token
///
/// # Returns
/// - `201 Created` - The published news item
/// - `400 Bad Request` - Malformed form, unknown tag ids, or bad image type
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database or filesystem error
#[utoipa::path(
    post,
    path = "/news",
    tag = NEWS_TAG,
    responses(
        (status = 201, description = "Successfully published news", body = NewsDto),
        (status = 400, description = "Invalid news data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_news(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let author = AuthGuard::new(&state.db, &state.jwt_secret)
        .require(&headers)
        .await?;

    let form = NewsForm::from_multipart(multipart).await?;
    let (params, image) = form.into_create(author.id)?;

    let news = NewsService::new(&state.db, &state.images)
        .create(params, image)
        .await?;

    Ok((StatusCode::CREATED, Json(news.into_dto())))
}

/// List all news, newest first.
#[utoipa::path(
    get,
    path = "/news",
    tag = NEWS_TAG,
    responses(
        (status = 200, description = "All news ordered by date descending", body = Vec<NewsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news_list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let news = NewsService::new(&state.db, &state.images).get_all().await?;

    Ok(Json(
        news.into_iter()
            .map(|item| item.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Get a single news item.
#[utoipa::path(
    get,
    path = "/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News id")),
    responses(
        (status = 200, description = "The news item", body = NewsDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let news = NewsService::new(&state.db, &state.images)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("News {id} not found")))?;

    Ok(Json(news.into_dto()))
}

/// Replace a news item's fields.
///
/// The author never changes; the tag set is replaced wholesale.
#[utoipa::path(
    put,
    path = "/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News id")),
    responses(
        (status = 200, description = "The updated news item", body = NewsDto),
        (status = 400, description = "Invalid news data", body = ErrorDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_news(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = NewsForm::from_multipart(multipart).await?;
    let (params, image) = form.into_update(id)?;

    let news = NewsService::new(&state.db, &state.images)
        .update(params, image)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("News {id} not found")))?;

    Ok(Json(news.into_dto()))
}

/// Partially update a news item.
#[utoipa::path(
    patch,
    path = "/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News id")),
    responses(
        (status = 200, description = "The patched news item", body = NewsDto),
        (status = 400, description = "Invalid news data", body = ErrorDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_news(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = NewsForm::from_multipart(multipart).await?;
    let (params, image) = form.into_patch(id)?;

    let news = NewsService::new(&state.db, &state.images)
        .patch(params, image)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("News {id} not found")))?;

    Ok(Json(news.into_dto()))
}

/// Delete a news item.
#[utoipa::path(
    delete,
    path = "/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News id")),
    responses(
        (status = 200, description = "News deleted", body = MessageDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = NewsService::new(&state.db, &state.images).delete(id).await?;

    if !deleted {
        return Err(AppError::NotFound(format!("News {id} not found")));
    }

    Ok(Json(MessageDto {
        message: "News deleted".to_string(),
    }))
}
