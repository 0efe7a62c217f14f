//! Application layer
//!
//! This layer contains use cases that orchestrate domain logic to implement
//! application-specific workflows. Use cases coordinate domain services and
//! map between command/response shapes and domain models.

pub mod notification;
