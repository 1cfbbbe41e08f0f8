use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000007_create_request_table::Request;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuardianRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(GuardianRequest::Id))
                    .col(integer_uniq(GuardianRequest::RequestId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guardian_request_request_id")
                            .from(GuardianRequest::Table, GuardianRequest::RequestId)
                            .to(Request::Table, Request::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuardianRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuardianRequest {
    Table,
    Id,
    RequestId,
}
