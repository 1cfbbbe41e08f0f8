//! Bearer token authentication for protected endpoints.
//!
//! Access tokens are HS256-signed JWTs whose subject is the user id. A
//! token is only as good as the user behind it: verification always ends
//! with a database lookup, so deleted accounts lose access the moment their
//! row disappears.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
};

/// Access token lifetime.
pub const TOKEN_TTL_MINUTES: i64 = 30;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id, stringified per JWT convention.
    pub sub: String,
    /// Expiry as a unix timestamp.
    pub exp: usize,
}

/// Signs a fresh access token for the given user.
pub fn issue_token(user_id: i32, secret: &str) -> Result<String, AppError> {
    let expires_at = Utc::now() + Duration::minutes(TOKEN_TTL_MINUTES);
    let claims = Claims {
        sub: user_id.to_string(),
        exp: expires_at.timestamp() as usize,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|err| AppError::InternalError(format!("Failed to sign access token: {err}")))
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt_secret: &'a str,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt_secret: &'a str) -> Self {
        Self { db, jwt_secret }
    }

    /// Verifies the bearer token in the request headers and resolves it to
    /// a stored user.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - The authenticated user
    /// - `Err(AppError::AuthErr)` - Missing, invalid, or expired token, or
    ///   a subject without a matching user
    pub async fn require(&self, headers: &HeaderMap) -> Result<entity::user::Model, AppError> {
        let token = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AuthError::MissingToken)?;

        let token_data = jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AuthError::InvalidToken)?;

        let user_id: i32 = token_data
            .claims
            .sub
            .parse()
            .map_err(|_| AuthError::InvalidToken)?;

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UnknownSubject(user_id).into());
        };

        Ok(user)
    }
}
