use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dog::Table)
                    .if_not_exists()
                    .col(pk_auto(Dog::Id))
                    .col(string(Dog::Name))
                    .col(integer(Dog::Age))
                    .col(string(Dog::Breed))
                    .col(text(Dog::Description))
                    .col(date_null(Dog::IntakeDate))
                    .col(boolean(Dog::VeterinaryPassport))
                    .col(string(Dog::Gender))
                    .col(string_null(Dog::ImageUrl))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Dog {
    Table,
    Id,
    Name,
    Age,
    Breed,
    Description,
    IntakeDate,
    VeterinaryPassport,
    Gender,
    ImageUrl,
}
