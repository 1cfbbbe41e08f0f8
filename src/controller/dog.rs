use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::{ErrorDto, MessageDto},
        dog::{DogDto, DogForm},
    },
    error::AppError,
    service::dog::DogService,
    state::AppState,
};

/// Tag for grouping dog endpoints in OpenAPI documentation
pub static DOG_TAG: &str = "dogs";

/// Create a new dog.
///
/// Takes a multipart form with the dog's fields, an optional `image` file
/// part (JPEG or PNG), and an optional `tag_ids` comma-delimited string.
///
/// # Returns
/// - `201 Created` - The created dog with its tag set
/// - `400 Bad Request` - Malformed form, unknown tag ids, or bad image type
/// - `500 Internal Server Error` - Database or filesystem error
#[utoipa::path(
    post,
    path = "/dogs",
    tag = DOG_TAG,
    responses(
        (status = 201, description = "Successfully created dog", body = DogDto),
        (status = 400, description = "Invalid dog data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_dog(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = DogForm::from_multipart(multipart).await?;
    let (params, image) = form.into_create()?;

    let dog = DogService::new(&state.db, &state.images)
        .create(params, image)
        .await?;

    Ok((StatusCode::CREATED, Json(dog.into_dto())))
}

/// List all dogs with their tags.
#[utoipa::path(
    get,
    path = "/dogs",
    tag = DOG_TAG,
    responses(
        (status = 200, description = "All dogs ordered by id", body = Vec<DogDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dogs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let dogs = DogService::new(&state.db, &state.images).get_all().await?;

    Ok(Json(
        dogs.into_iter().map(|dog| dog.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Get a single dog.
#[utoipa::path(
    get,
    path = "/dogs/{id}",
    tag = DOG_TAG,
    params(("id" = i32, Path, description = "Dog id")),
    responses(
        (status = 200, description = "The dog", body = DogDto),
        (status = 404, description = "Dog not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dog(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let dog = DogService::new(&state.db, &state.images)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Dog {id} not found")))?;

    Ok(Json(dog.into_dto()))
}

/// Replace a dog's fields.
///
/// Full update: every field must be present in the form. The tag set is
/// replaced wholesale; a new image replaces the stored one, whose file is
/// removed.
#[utoipa::path(
    put,
    path = "/dogs/{id}",
    tag = DOG_TAG,
    params(("id" = i32, Path, description = "Dog id")),
    responses(
        (status = 200, description = "The updated dog", body = DogDto),
        (status = 400, description = "Invalid dog data", body = ErrorDto),
        (status = 404, description = "Dog not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_dog(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = DogForm::from_multipart(multipart).await?;
    let (params, image) = form.into_update(id)?;

    let dog = DogService::new(&state.db, &state.images)
        .update(params, image)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Dog {id} not found")))?;

    Ok(Json(dog.into_dto()))
}

/// Partially update a dog.
///
/// Only submitted form fields change; `tag_ids=""` clears the tag set.
#[utoipa::path(
    patch,
    path = "/dogs/{id}",
    tag = DOG_TAG,
    params(("id" = i32, Path, description = "Dog id")),
    responses(
        (status = 200, description = "The patched dog", body = DogDto),
        (status = 400, description = "Invalid dog data", body = ErrorDto),
        (status = 404, description = "Dog not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_dog(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = DogForm::from_multipart(multipart).await?;
    let (params, image) = form.into_patch(id)?;

    let dog = DogService::new(&state.db, &state.images)
        .patch(params, image)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Dog {id} not found")))?;

    Ok(Json(dog.into_dto()))
}

/// Delete a dog.
///
/// Removes the tag associations, the stored image file, and the row.
#[utoipa::path(
    delete,
    path = "/dogs/{id}",
    tag = DOG_TAG,
    params(("id" = i32, Path, description = "Dog id")),
    responses(
        (status = 200, description = "Dog deleted", body = MessageDto),
        (status = 404, description = "Dog not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_dog(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = DogService::new(&state.db, &state.images).delete(id).await?;

    if !deleted {
        return Err(AppError::NotFound(format!("Dog {id} not found")));
    }

    Ok(Json(MessageDto {
        message: "Dog deleted".to_string(),
    }))
}
