//! Domain models and operation parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary. The request model
//! carries its detail record as a tagged variant so a mismatch between the
//! request type and the populated detail relation is unrepresentable above
//! the data layer.

pub mod dog;
pub mod news;
pub mod request;
pub mod stats;
pub mod tag;
pub mod user;
