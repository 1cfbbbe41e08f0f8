pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_tag_table;
mod m20260105_000003_create_dog_table;
mod m20260105_000004_create_news_table;
mod m20260105_000005_create_tag_dog_table;
mod m20260105_000006_create_tag_news_table;
mod m20260106_000007_create_request_table;
mod m20260106_000008_create_adoption_request_table;
mod m20260106_000009_create_guardian_request_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_tag_table::Migration),
            Box::new(m20260105_000003_create_dog_table::Migration),
            Box::new(m20260105_000004_create_news_table::Migration),
            Box::new(m20260105_000005_create_tag_dog_table::Migration),
            Box::new(m20260105_000006_create_tag_news_table::Migration),
            Box::new(m20260106_000007_create_request_table::Migration),
            Box::new(m20260106_000008_create_adoption_request_table::Migration),
            Box::new(m20260106_000009_create_guardian_request_table::Migration),
        ]
    }
}
