use serde::Serialize;
use utoipa::ToSchema;

/// JSON body returned for every failed request.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Generic confirmation body for deletions.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
