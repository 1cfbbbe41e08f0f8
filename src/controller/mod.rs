//! HTTP API controllers.
//!
//! Controllers translate between the HTTP layer and the service layer:
//! extracting and validating payloads, enforcing authentication where an
//! endpoint requires it, and mapping domain results to status codes. Each
//! handler carries a `#[utoipa::path]` annotation feeding the OpenAPI
//! document.

pub mod auth;
pub mod dog;
pub mod news;
pub mod request;
pub mod stats;
pub mod tag;
pub mod user;
