//! Tag data repository for database operations.
//!
//! This module provides the `TagRepository` for managing the shared tag
//! vocabulary. Tags are referenced by both dogs and news through junction
//! tables, so deletion clears the junction rows in the same transaction.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::model::tag::{Tag, UpsertTagParams};

pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new tag.
    ///
    /// # Arguments
    /// - `params` - Tag parameters containing the name
    ///
    /// # Returns
    /// - `Ok(Tag)` - The created tag with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: UpsertTagParams) -> Result<Tag, DbErr> {
        let entity = entity::tag::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Tag::from_entity(entity))
    }

    /// Gets all tags ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Tag>, DbErr> {
        let entities = entity::prelude::Tag::find()
            .order_by_asc(entity::tag::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Tag::from_entity).collect())
    }

    /// Finds a tag by its id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Tag>, DbErr> {
        let entity = entity::prelude::Tag::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Tag::from_entity))
    }

    /// Finds all tags whose id is in the given list, ordered by id.
    ///
    /// Used to validate referenced tag ids before attaching them; the caller
    /// compares the returned set against the requested one.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Tag>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::tag::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Tag::from_entity).collect())
    }

    /// Renames a tag.
    ///
    /// # Returns
    /// - `Ok(Some(Tag))` - The updated tag
    /// - `Ok(None)` - No tag with that id exists
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: UpsertTagParams) -> Result<Option<Tag>, DbErr> {
        let Some(entity) = entity::prelude::Tag::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::tag::ActiveModel = entity.into();
        active_model.name = ActiveValue::Set(params.name);
        let entity = active_model.update(self.db).await?;

        Ok(Some(Tag::from_entity(entity)))
    }

    /// Deletes a tag together with its dog and news associations.
    ///
    /// Runs in a transaction so the junction rows and the tag row disappear
    /// atomically.
    ///
    /// # Returns
    /// - `Ok(true)` - Tag deleted
    /// - `Ok(false)` - No tag with that id exists
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::TagDog::delete_many()
            .filter(entity::tag_dog::Column::TagId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::TagNews::delete_many()
            .filter(entity::tag_news::Column::TagId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Tag::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
