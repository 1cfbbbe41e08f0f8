use std::path::PathBuf;

use uuid::Uuid;

use crate::{
    error::AppError,
    service::image::{ImageKind, ImageStore, ImageUpload},
};

mod save;

/// Creates a fresh static root with the upload subdirectories.
async fn temp_static_root() -> PathBuf {
    let root = std::env::temp_dir().join(format!("shelter-test-{}", Uuid::new_v4()));
    tokio::fs::create_dir_all(root.join("dogs")).await.unwrap();
    tokio::fs::create_dir_all(root.join("news")).await.unwrap();
    root
}

fn png_upload(file_name: &str) -> ImageUpload {
    ImageUpload {
        file_name: Some(file_name.to_string()),
        content_type: Some("image/png".to_string()),
        data: vec![0x89, 0x50, 0x4e, 0x47],
    }
}
