//! Dashboard counters for the admin overview.

use entity::enums::RequestStatus;
use sea_orm::DatabaseConnection;

use crate::{
    data::{dog::DogRepository, request::RequestRepository},
    error::AppError,
    model::stats::Stats,
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gathers the counters shown on the admin dashboard: requests awaiting
    /// processing and dogs currently on record.
    pub async fn gather(&self) -> Result<Stats, AppError> {
        let new_requests_count = RequestRepository::new(self.db)
            .count_by_status(RequestStatus::New)
            .await?;
        let total_dogs_count = DogRepository::new(self.db).count().await?;

        Ok(Stats {
            new_requests_count,
            total_dogs_count,
        })
    }
}
