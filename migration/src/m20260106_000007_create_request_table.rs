use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // DogId is intentionally not a foreign key: requests reference dogs
        // loosely and must survive dog removal.
        manager
            .create_table(
                Table::create()
                    .table(Request::Table)
                    .if_not_exists()
                    .col(pk_auto(Request::Id))
                    .col(integer(Request::DogId))
                    .col(string(Request::FullName))
                    .col(string(Request::Phone))
                    .col(string(Request::Email))
                    .col(string(Request::Status))
                    .col(string(Request::Type))
                    .col(
                        timestamp(Request::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Request::ClosedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Request::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Request {
    Table,
    Id,
    DogId,
    FullName,
    Phone,
    Email,
    Status,
    Type,
    CreatedAt,
    ClosedAt,
}
