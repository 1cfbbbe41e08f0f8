//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user accounts.
//! Passwords arrive here already hashed; the repository never sees a
//! plaintext password. Lookups used by the authentication gate return the
//! raw entity model because only that layer may read the stored hash.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::model::user::User;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user.
    ///
    /// # Arguments
    /// - `username` - Unique login name
    /// - `password_hash` - Argon2 hash of the password
    /// - `email` - Unique contact address
    /// - `role` - Role label, e.g. `Admin`
    ///
    /// # Returns
    /// - `Ok(User)` - The created user without the hash
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(
        &self,
        username: String,
        password_hash: String,
        email: String,
        role: String,
    ) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            password: ActiveValue::Set(password_hash),
            email: ActiveValue::Set(email),
            role: ActiveValue::Set(role),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id, returning the raw entity model including the
    /// password hash. For token validation only.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by username, returning the raw entity model including
    /// the password hash. For credential verification only.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Gets all users ordered by id.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Updates a user's account fields.
    ///
    /// # Arguments
    /// - `id` - User id
    /// - `username` - New login name
    /// - `password_hash` - New hash, or `None` to keep the stored one
    /// - `email` - New contact address
    /// - `role` - New role label
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id exists
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        username: String,
        password_hash: Option<String>,
        email: String,
        role: String,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = entity.into();
        active_model.username = ActiveValue::Set(username);
        if let Some(hash) = password_hash {
            active_model.password = ActiveValue::Set(hash);
        }
        active_model.email = ActiveValue::Set(email);
        active_model.role = ActiveValue::Set(role);
        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Deletes a user together with their authored news and those news'
    /// tag associations, all in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id exists
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let news_ids: Vec<i32> = entity::prelude::News::find()
            .filter(entity::news::Column::AuthorId.eq(id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|news| news.id)
            .collect();

        if !news_ids.is_empty() {
            entity::prelude::TagNews::delete_many()
                .filter(entity::tag_news::Column::NewsId.is_in(news_ids))
                .exec(&txn)
                .await?;

            entity::prelude::News::delete_many()
                .filter(entity::news::Column::AuthorId.eq(id))
                .exec(&txn)
                .await?;
        }

        let result = entity::prelude::User::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
