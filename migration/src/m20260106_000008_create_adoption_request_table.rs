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
                    .table(AdoptionRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(AdoptionRequest::Id))
                    .col(integer_uniq(AdoptionRequest::RequestId))
                    .col(string(AdoptionRequest::FamilyMemberCount))
                    .col(string(AdoptionRequest::HadExperienceAdoptionPet))
                    .col(string(AdoptionRequest::AdoptionPurpose))
                    .col(string(AdoptionRequest::HousingType))
                    .col(string(AdoptionRequest::HousingArea))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_adoption_request_request_id")
                            .from(AdoptionRequest::Table, AdoptionRequest::RequestId)
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
            .drop_table(Table::drop().table(AdoptionRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AdoptionRequest {
    Table,
    Id,
    RequestId,
    FamilyMemberCount,
    HadExperienceAdoptionPet,
    AdoptionPurpose,
    HousingType,
    HousingArea,
}
