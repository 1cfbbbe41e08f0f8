use crate::{error::AppError, service::tag::TagService};
use test_utils::{builder::TestBuilder, factory};

mod resolve;

/// Builds a test context with the tag table.
async fn tag_tables() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap()
}
