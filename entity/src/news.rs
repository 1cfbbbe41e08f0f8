use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "news")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub date: DateTimeUtc,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub author_id: i32,
    pub preview: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::tag_news::Entity")]
    TagNews,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::tag_news::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TagNews.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::tag_news::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::tag_news::Relation::News.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
