use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_tag_table::Tag, m20260105_000004_create_news_table::News,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TagNews::Table)
                    .if_not_exists()
                    .col(integer(TagNews::NewsId))
                    .col(integer(TagNews::TagId))
                    .primary_key(
                        Index::create()
                            .name("pk_tag_news")
                            .col(TagNews::NewsId)
                            .col(TagNews::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tag_news_news_id")
                            .from(TagNews::Table, TagNews::NewsId)
                            .to(News::Table, News::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tag_news_tag_id")
                            .from(TagNews::Table, TagNews::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TagNews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TagNews {
    Table,
    NewsId,
    TagId,
}
