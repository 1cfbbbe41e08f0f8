use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with
/// in-memory SQLite databases. Add entity tables in dependency order, then
/// call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Tag, Dog, TagDog};
///
/// let test = TestBuilder::new()
///     .with_table(Tag)
///     .with_table(Dog)
///     .with_table(TagDog)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, generated
    /// from entity models and executed in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables should be added in dependency order: tables with foreign keys
    /// after their referenced tables.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table of the shelter schema in dependency order.
    ///
    /// Use this for tests that cross entity boundaries (requests referencing
    /// dogs, news authored by users, tags attached to both); for narrower
    /// tests prefer `with_table()` with just the tables involved.
    pub fn with_shelter_tables(self) -> Self {
        self.with_table(User)
            .with_table(Tag)
            .with_table(Dog)
            .with_table(News)
            .with_table(TagDog)
            .with_table(TagNews)
            .with_table(Request)
            .with_table(AdoptionRequest)
            .with_table(GuardianRequest)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
