//! Serialized API types.
//!
//! DTOs carry the wire representation: serde for JSON bodies, utoipa
//! schemas for the OpenAPI document, and multipart form parsing for the
//! dog/news endpoints. Conversion into domain parameter types performs the
//! payload-level validation (mutually exclusive request details, typed form
//! fields), so nothing malformed reaches the service layer.

pub mod api;
pub mod auth;
pub mod dog;
pub mod news;
pub mod request;
pub mod stats;
pub mod tag;
pub mod user;
