//! Image storage for uploaded dog and news pictures.
//!
//! Uploads are written under the static root with a generated UUID name,
//! never the client-supplied one, and referenced by a `/static/...` URL
//! path stored on the owning row.

use std::path::{Component, Path, PathBuf};

use axum::extract::multipart::Field;
use uuid::Uuid;

use crate::error::AppError;

const ALLOWED_CONTENT_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/jpg"];

const DEFAULT_EXTENSION: &str = "jpg";

/// Which upload directory an image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Dog,
    News,
}

impl ImageKind {
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Dog => "dogs",
            Self::News => "news",
        }
    }
}

/// An image file extracted from a multipart field, held in memory until
/// the owning record is validated.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl ImageUpload {
    /// Reads an upload out of a multipart field. An empty field, as sent by
    /// browsers for a file input left blank, counts as no upload.
    pub async fn from_field(field: Field<'_>) -> Result<Option<Self>, AppError> {
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?.to_vec();

        if data.is_empty() && file_name.as_deref().is_none_or(str::is_empty) {
            return Ok(None);
        }

        Ok(Some(Self {
            file_name,
            content_type,
            data,
        }))
    }

    /// Extension for the stored file, taken from the submitted file name.
    /// Anything unusable falls back to `jpg`.
    fn extension(&self) -> String {
        self.file_name
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
    }
}

/// Writes uploads to disk and removes stale ones.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Validates and stores an upload, returning the URL path to save on
    /// the owning row.
    ///
    /// # Returns
    /// - `Ok(String)` - URL path of the form `/static/{kind}/{uuid}.{ext}`
    /// - `Err(AppError::BadRequest)` - Content type is not JPEG or PNG
    /// - `Err(AppError::InternalError)` - Filesystem write failed
    pub async fn save(&self, kind: ImageKind, upload: ImageUpload) -> Result<String, AppError> {
        let content_type = upload.content_type.as_deref().unwrap_or("unknown");
        if !ALLOWED_CONTENT_TYPES.contains(&content_type) {
            return Err(AppError::BadRequest(format!(
                "Unsupported image type {content_type}, expected JPEG or PNG"
            )));
        }

        let file_name = format!("{}.{}", Uuid::new_v4(), upload.extension());
        let path = self.root.join(kind.dir_name()).join(&file_name);

        tokio::fs::write(&path, &upload.data)
            .await
            .map_err(|err| {
                AppError::InternalError(format!("Failed to write image {}: {err}", path.display()))
            })?;

        Ok(format!("/static/{}/{}", kind.dir_name(), file_name))
    }

    /// Best-effort removal of a stored image by its URL path. Failures are
    /// logged and swallowed so a missing file never blocks the operation
    /// that replaced or deleted the owning row.
    pub async fn remove(&self, url: &str) {
        let Some(relative) = url.strip_prefix("/static/") else {
            tracing::warn!("Not removing image with unexpected url {url}");
            return;
        };

        let relative = Path::new(relative);
        if relative
            .components()
            .any(|part| !matches!(part, Component::Normal(_)))
        {
            tracing::warn!("Not removing image with unexpected url {url}");
            return;
        }

        let path = self.root.join(relative);
        if let Err(err) = tokio::fs::remove_file(&path).await {
            tracing::warn!("Failed to remove image {}: {err}", path.display());
        }
    }
}
