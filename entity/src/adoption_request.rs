use sea_orm::entity::prelude::*;

use crate::enums::{AdoptionPurpose, FamilyMemberCount, HousingArea, HousingType, PetExperience};

/// Detail row existing only while the owning request has type
/// `ADOPTION_REQUEST`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "adoption_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub request_id: i32,
    pub family_member_count: FamilyMemberCount,
    pub had_experience_adoption_pet: PetExperience,
    pub adoption_purpose: AdoptionPurpose,
    pub housing_type: HousingType,
    pub housing_area: HousingArea,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::request::Entity",
        from = "Column::RequestId",
        to = "super::request::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Request,
}

impl Related<super::request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Request.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
