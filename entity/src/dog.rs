use sea_orm::entity::prelude::*;

use crate::enums::Gender;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "dog")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub breed: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub intake_date: Option<Date>,
    pub veterinary_passport: bool,
    pub gender: Gender,
    pub image_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tag_dog::Entity")]
    TagDog,
}

impl Related<super::tag_dog::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TagDog.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::tag_dog::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::tag_dog::Relation::Dog.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
