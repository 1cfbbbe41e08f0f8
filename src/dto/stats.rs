use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatsDto {
    pub new_requests_count: u64,
    pub total_dogs_count: u64,
}
