use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_tag_table::Tag, m20260105_000003_create_dog_table::Dog,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TagDog::Table)
                    .if_not_exists()
                    .col(integer(TagDog::DogId))
                    .col(integer(TagDog::TagId))
                    .primary_key(
                        Index::create()
                            .name("pk_tag_dog")
                            .col(TagDog::DogId)
                            .col(TagDog::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tag_dog_dog_id")
                            .from(TagDog::Table, TagDog::DogId)
                            .to(Dog::Table, Dog::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tag_dog_tag_id")
                            .from(TagDog::Table, TagDog::TagId)
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
            .drop_table(Table::drop().table(TagDog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TagDog {
    Table,
    DogId,
    TagId,
}
