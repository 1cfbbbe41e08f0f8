use std::path::PathBuf;

use uuid::Uuid;

use crate::{
    error::AppError,
    service::{image::ImageStore, news::NewsService},
};
use test_utils::{builder::TestBuilder, factory};

mod delete;

/// Builds a test context with the news tables.
async fn news_tables() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::News)
        .with_table(entity::prelude::Tag)
        .with_table(entity::prelude::TagNews)
        .build()
        .await
        .unwrap()
}

/// Creates a fresh static root with the news upload directory.
async fn temp_static_root() -> PathBuf {
    let root = std::env::temp_dir().join(format!("shelter-test-{}", Uuid::new_v4()));
    tokio::fs::create_dir_all(root.join("news")).await.unwrap();
    root
}
