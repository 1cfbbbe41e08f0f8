//! Shelter Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests
//! for the shelter backend. This crate offers a builder pattern for creating
//! test contexts with in-memory SQLite databases and customizable table
//! schemas, plus factories for creating test rows with sensible defaults.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database
//! tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Tag;
//!
//! #[tokio::test]
//! async fn test_tag_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Tag)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
