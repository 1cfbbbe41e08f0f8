//! Data repositories for database operations.
//!
//! Repositories own every query against the database and convert entity
//! models into domain models at the infrastructure boundary. Writes that
//! touch more than one table (junction rows, request detail rows) run inside
//! an explicit transaction so partial cascades cannot be observed.

pub mod dog;
pub mod news;
pub mod request;
pub mod tag;
pub mod user;
