pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use entities::{NotificationMessage, NotificationResult};
pub use errors::NotificationError;
pub use ports::SmsMessagingPort;
pub use services::{NotificationService, order_ready_message};
