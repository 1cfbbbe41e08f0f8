//! User domain models and parameters.
//!
//! The domain model deliberately excludes the password hash; only the data
//! layer and the authentication gate ever see the stored hash.

use crate::dto::user::UserDto;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            role: entity.role,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            role: self.role,
        }
    }
}

/// Parameters for creating a user. `password` is the plaintext submitted by
/// the caller; the service hashes it before anything is stored.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: String,
}

/// Parameters for a full user update. A `None` password keeps the stored
/// hash; `Some` is rehashed with a fresh salt.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: i32,
    pub username: String,
    pub password: Option<String>,
    pub email: String,
    pub role: String,
}
