//! Tag management and tag id resolution.

use sea_orm::DatabaseConnection;

use crate::{
    data::tag::TagRepository,
    error::AppError,
    model::tag::{Tag, UpsertTagParams},
};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: UpsertTagParams) -> Result<Tag, AppError> {
        let tag = TagRepository::new(self.db).create(params).await?;

        Ok(tag)
    }

    pub async fn get_all(&self) -> Result<Vec<Tag>, AppError> {
        let tags = TagRepository::new(self.db).get_all().await?;

        Ok(tags)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Tag>, AppError> {
        let tag = TagRepository::new(self.db).find_by_id(id).await?;

        Ok(tag)
    }

    pub async fn update(&self, id: i32, params: UpsertTagParams) -> Result<Option<Tag>, AppError> {
        let tag = TagRepository::new(self.db).update(id, params).await?;

        Ok(tag)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = TagRepository::new(self.db).delete(id).await?;

        Ok(deleted)
    }

    /// Validates a list of referenced tag ids, returning the deduplicated
    /// id set to attach.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Sorted, deduplicated ids, all of which exist
    /// - `Err(AppError::BadRequest)` - At least one id has no tag
    pub async fn resolve(&self, mut ids: Vec<i32>) -> Result<Vec<i32>, AppError> {
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(ids);
        }

        let found = TagRepository::new(self.db).find_by_ids(&ids).await?;

        if found.len() != ids.len() {
            let found_ids: Vec<i32> = found.into_iter().map(|tag| tag.id).collect();
            let missing: Vec<i32> = ids
                .iter()
                .copied()
                .filter(|id| !found_ids.contains(id))
                .collect();

            return Err(AppError::BadRequest(format!(
                "Unknown tag ids: {missing:?}"
            )));
        }

        Ok(ids)
    }
}
