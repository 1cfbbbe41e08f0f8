//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. It holds the database
//! connection pool, the token signing secret, and the image store — an
//! explicitly constructed, passed-down persistence handle rather than a
//! process-wide singleton.

use sea_orm::DatabaseConnection;

use crate::{config::Config, service::image::ImageStore};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HS256 secret used to sign and verify access tokens.
    pub jwt_secret: String,

    /// Store for uploaded images, rooted at the directory served under
    /// `/static`.
    pub images: ImageStore,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            jwt_secret: config.jwt_secret.clone(),
            images: ImageStore::new(&config.static_dir),
        }
    }
}
