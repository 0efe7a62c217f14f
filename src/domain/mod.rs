pub mod auth;
pub mod notification;

// Re-export notification module for easier access
pub use notification::*;
