use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::tag::UpsertTagParams;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TagDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct TagUpsertDto {
    pub name: String,
}

impl TagUpsertDto {
    pub fn into_params(self) -> UpsertTagParams {
        UpsertTagParams { name: self.name }
    }
}
