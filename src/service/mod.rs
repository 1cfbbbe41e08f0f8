//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits
//! between the controller (API) layer and the data (repository) layer.
//! Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating repository calls, password hashing,
//!   token issuance, and image storage
//! - **Domain Models**: Working with domain models rather than DTOs or
//!   entity models

pub mod auth;
pub mod dog;
pub mod image;
pub mod news;
pub mod request;
pub mod stats;
pub mod tag;
pub mod user;

#[cfg(test)]
mod test;
