use serde::{Deserialize, Serialize};

/// Data needed to tell a client that their order can be picked up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
  /// Destination phone number, as received from the caller
  pub phone_number: String,
  pub order_id: String,
  /// PIN the client must present to claim the order
  pub security_pin: String,
  pub restaurant_name: String,
}

/// Outcome of an SMS delivery attempt
///
/// Delivery failures are reported through this type rather than as errors, so
/// a provider outage never surfaces as an unhandled failure in the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationResult {
  pub success: bool,
  /// Provider message identifier (present on success)
  pub message_id: Option<String>,
  /// Human-readable failure reason (present on failure)
  pub error_message: Option<String>,
}

impl NotificationResult {
  /// Creates a successful result carrying the provider message id
  pub fn success(message_id: impl Into<String>) -> Self {
    Self {
      success: true,
      message_id: Some(message_id.into()),
      error_message: None,
    }
  }

  /// Creates a failed result carrying the failure reason
  pub fn failure(error_message: impl Into<String>) -> Self {
    Self {
      success: false,
      message_id: None,
      error_message: Some(error_message.into()),
    }
  }

  pub fn is_success(&self) -> bool {
    self.success
  }
}
