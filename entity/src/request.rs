use sea_orm::entity::prelude::*;

use crate::enums::{RequestStatus, RequestType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Plain column, deliberately not a foreign key to `dog`.
    pub dog_id: i32,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub status: RequestStatus,
    pub r#type: RequestType,
    pub created_at: DateTimeUtc,
    pub closed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::adoption_request::Entity")]
    AdoptionRequest,
    #[sea_orm(has_one = "super::guardian_request::Entity")]
    GuardianRequest,
}

impl Related<super::adoption_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AdoptionRequest.def()
    }
}

impl Related<super::guardian_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuardianRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
