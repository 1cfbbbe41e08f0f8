//! Credential verification and access token issuance.

use argon2::{
    password_hash::{PasswordHash, PasswordVerifier},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::auth,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt_secret: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt_secret: &'a str) -> Self {
        Self { db, jwt_secret }
    }

    /// Verifies a username/password pair and issues an access token.
    ///
    /// Unknown usernames and wrong passwords produce the same error, so the
    /// response does not reveal which accounts exist.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed bearer token
    /// - `Err(AppError::AuthErr)` - Invalid credentials
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let parsed_hash =
            PasswordHash::new(&user.password).map_err(|_| AuthError::InvalidCredentials)?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;

        auth::issue_token(user.id, self.jwt_secret)
    }
}
