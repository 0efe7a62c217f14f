use thiserror::Error;

/// Errors raised by the notification domain
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotificationError {
  /// A required argument was missing or blank
  #[error("{0}")]
  Validation(String),

  #[error("Invalid phone number: {0}")]
  InvalidPhoneNumber(String),
}

impl NotificationError {
  /// Creates a validation error with the given message
  pub fn validation(message: impl Into<String>) -> Self {
    Self::Validation(message.into())
  }
}
