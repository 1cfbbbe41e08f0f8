//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories insert rows directly through the entity layer, so
//! tests can arrange state without going through the repositories under
//! test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let dog = factory::dog::create_dog(&db).await?;
//! let tag = factory::tag::create_tag(&db).await?;
//! let (request, details) = factory::request::RequestFactory::new(&db)
//!     .dog_id(dog.id)
//!     .build_adoption()
//!     .await?;
//! ```

pub mod dog;
pub mod helpers;
pub mod news;
pub mod request;
pub mod tag;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use dog::create_dog;
pub use news::create_news;
pub use tag::create_tag;
pub use user::create_user;
