use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::{CreateUserParams, UpdateUserParams};

fn default_role() -> String {
    "Admin".to_string()
}

/// User representation for API responses. Never carries the password hash.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UserCreateDto {
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
}

impl UserCreateDto {
    pub fn into_params(self) -> CreateUserParams {
        CreateUserParams {
            username: self.username,
            password: self.password,
            email: self.email,
            role: self.role,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UserUpdateDto {
    pub username: String,
    /// Omitted or null keeps the stored password.
    #[serde(default)]
    pub password: Option<String>,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
}

impl UserUpdateDto {
    pub fn into_params(self, id: i32) -> UpdateUserParams {
        UpdateUserParams {
            id,
            username: self.username,
            password: self.password,
            email: self.email,
            role: self.role,
        }
    }
}
