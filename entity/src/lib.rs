//! SeaORM entity models for the shelter database.
//!
//! Each module maps one table. Junction tables (`tag_dog`, `tag_news`) carry
//! the many-to-many relations between tags and dogs/news. The `enums` module
//! holds the active enums shared by entities, DTOs, and the OpenAPI schema.

pub mod adoption_request;
pub mod dog;
pub mod enums;
pub mod guardian_request;
pub mod news;
pub mod prelude;
pub mod request;
pub mod tag;
pub mod tag_dog;
pub mod tag_news;
pub mod user;
