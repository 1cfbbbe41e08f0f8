//! Adoption and guardianship request workflow.

use sea_orm::DatabaseConnection;

use crate::{
    data::request::RequestRepository,
    error::AppError,
    model::request::{CreateRequestParams, PatchRequestParams, Request, UpdateRequestParams},
};

pub struct RequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateRequestParams) -> Result<Request, AppError> {
        let request = RequestRepository::new(self.db).create(params).await?;

        Ok(request)
    }

    pub async fn get_all(&self) -> Result<Vec<Request>, AppError> {
        let requests = RequestRepository::new(self.db).get_all().await?;

        Ok(requests)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Request>, AppError> {
        let request = RequestRepository::new(self.db).find_by_id(id).await?;

        Ok(request)
    }

    pub async fn update(&self, params: UpdateRequestParams) -> Result<Option<Request>, AppError> {
        let request = RequestRepository::new(self.db).update(params).await?;

        Ok(request)
    }

    pub async fn patch(&self, params: PatchRequestParams) -> Result<Option<Request>, AppError> {
        let request = RequestRepository::new(self.db).patch(params).await?;

        Ok(request)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = RequestRepository::new(self.db).delete(id).await?;

        Ok(deleted)
    }
}
