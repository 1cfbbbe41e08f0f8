use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tag_dog::Entity")]
    TagDog,
    #[sea_orm(has_many = "super::tag_news::Entity")]
    TagNews,
}

impl Related<super::tag_dog::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TagDog.def()
    }
}

impl Related<super::tag_news::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TagNews.def()
    }
}

impl Related<super::dog::Entity> for Entity {
    fn to() -> RelationDef {
        super::tag_dog::Relation::Dog.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::tag_dog::Relation::Tag.def().rev())
    }
}

impl Related<super::news::Entity> for Entity {
    fn to() -> RelationDef {
        super::tag_news::Relation::News.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::tag_news::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
