//! Order-ready SMS notification service
//!
//! Notifies restaurant clients by SMS that their order is ready for pickup,
//! including the security PIN they must show to claim it.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
