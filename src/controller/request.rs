use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::{ErrorDto, MessageDto},
        request::{RequestCreateDto, RequestDto, RequestPatchDto, RequestUpdateDto},
    },
    error::AppError,
    service::request::RequestService,
    state::AppState,
};

/// Tag for grouping request endpoints in OpenAPI documentation
pub static REQUEST_TAG: &str = "requests";

/// Submit an adoption or guardianship request.
///
/// The detail payload must match the declared type: an adoption request
/// requires `adoption_details`, a guardianship request may omit
/// `guardian_details` entirely. Supplying both detail objects, or a detail
/// object for the other type, is rejected before anything is written.
///
/// # Returns
/// - `201 Created` - The created request with its detail
/// - `400 Bad Request` - Conflicting or missing detail payload
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/requests",
    tag = REQUEST_TAG,
    request_body = RequestCreateDto,
    responses(
        (status = 201, description = "Successfully created request", body = RequestDto),
        (status = 400, description = "Invalid request data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_request(
    State(state): State<AppState>,
    Json(payload): Json<RequestCreateDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = payload.into_params()?;

    let request = RequestService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// List all requests with their details.
#[utoipa::path(
    get,
    path = "/requests",
    tag = REQUEST_TAG,
    responses(
        (status = 200, description = "All requests ordered by id", body = Vec<RequestDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_requests(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let requests = RequestService::new(&state.db).get_all().await?;

    Ok(Json(
        requests
            .into_iter()
            .map(|request| request.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Get a single request.
#[utoipa::path(
    get,
    path = "/requests/{id}",
    tag = REQUEST_TAG,
    params(("id" = i32, Path, description = "Request id")),
    responses(
        (status = 200, description = "The request", body = RequestDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let request = RequestService::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Request {id} not found")))?;

    Ok(Json(request.into_dto()))
}

/// Replace a request's fields.
///
/// Changing the type discards the old detail row and inserts one of the
/// new type; no field values migrate. Moving the status to COMPLETED stamps
/// `closed_at`, moving it away clears the stamp.
#[utoipa::path(
    put,
    path = "/requests/{id}",
    tag = REQUEST_TAG,
    params(("id" = i32, Path, description = "Request id")),
    request_body = RequestUpdateDto,
    responses(
        (status = 200, description = "The updated request", body = RequestDto),
        (status = 400, description = "Invalid request data", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_request(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<RequestUpdateDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = payload.into_params(id)?;

    let request = RequestService::new(&state.db)
        .update(params)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Request {id} not found")))?;

    Ok(Json(request.into_dto()))
}

/// Partially update a request.
///
/// Unknown keys are rejected. Retyping to ADOPTION_REQUEST requires a
/// complete `adoption_details` object in the same patch.
#[utoipa::path(
    patch,
    path = "/requests/{id}",
    tag = REQUEST_TAG,
    params(("id" = i32, Path, description = "Request id")),
    request_body = RequestPatchDto,
    responses(
        (status = 200, description = "The patched request", body = RequestDto),
        (status = 400, description = "Invalid request data", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_request(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<RequestPatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = payload.into_params(id)?;

    let request = RequestService::new(&state.db)
        .patch(params)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Request {id} not found")))?;

    Ok(Json(request.into_dto()))
}

/// Delete a request together with its detail row.
#[utoipa::path(
    delete,
    path = "/requests/{id}",
    tag = REQUEST_TAG,
    params(("id" = i32, Path, description = "Request id")),
    responses(
        (status = 200, description = "Request deleted", body = MessageDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = RequestService::new(&state.db).delete(id).await?;

    if !deleted {
        return Err(AppError::NotFound(format!("Request {id} not found")));
    }

    Ok(Json(MessageDto {
        message: "Request deleted".to_string(),
    }))
}
