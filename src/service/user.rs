//! User account management.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::{
    data::{news::NewsRepository, user::UserRepository},
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams, User},
    service::image::ImageStore,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user, hashing the submitted password with a fresh salt.
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let hash = hash_password(&params.password)?;

        let user = UserRepository::new(self.db)
            .create(params.username, hash, params.email, params.role)
            .await?;

        Ok(user)
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).find_by_id(id).await?;

        Ok(user.map(User::from_entity))
    }

    /// Updates an account. A missing password keeps the stored hash.
    pub async fn update(&self, params: UpdateUserParams) -> Result<Option<User>, AppError> {
        let hash = params.password.as_deref().map(hash_password).transpose()?;

        let user = UserRepository::new(self.db)
            .update(params.id, params.username, hash, params.email, params.role)
            .await?;

        Ok(user)
    }

    /// Deletes a user and their authored news, cleaning up the news images
    /// from disk after the rows are gone.
    pub async fn delete(&self, id: i32, images: &ImageStore) -> Result<bool, AppError> {
        let authored = NewsRepository::new(self.db).find_by_author(id).await?;

        let deleted = UserRepository::new(self.db).delete(id).await?;

        if deleted {
            for news in authored {
                if let Some(image_url) = news.image_url {
                    images.remove(&image_url).await;
                }
            }
        }

        Ok(deleted)
    }
}

fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AppError::InternalError(format!("Failed to hash password: {err}")))
}
