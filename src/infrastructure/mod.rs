//! Infrastructure layer
//!
//! Concrete implementations of the domain ports: JWT verification, the
//! Twilio SMS client and configuration loading.

pub mod config;
pub mod security;
pub mod twilio;
