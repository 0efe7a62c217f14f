use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::application::notification::{
  SendOrderReadyNotificationCommand, SendOrderReadyNotificationResponse,
};

/// Rejects empty and whitespace-only values
fn not_blank(value: &str) -> Result<(), ValidationError> {
  if value.trim().is_empty() {
    return Err(ValidationError::new("not_blank"));
  }
  Ok(())
}

/// Text field as sent by JSON clients that write numbers for numeric ids
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
  Text(String),
  Number(serde_json::Number),
}

/// Accepts a string, a number or `null`; `null` becomes an empty string
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
    Some(TextOrNumber::Text(value)) => value,
    Some(TextOrNumber::Number(value)) => value.to_string(),
    None => String::new(),
  })
}

/// Request for the "order ready" notification
///
/// Missing and `null` fields deserialize as empty strings so they are
/// reported by validation rather than by the JSON parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderReadyNotificationRequest {
  /// Client phone number in E.164 format
  #[serde(default, deserialize_with = "lenient_string")]
  #[validate(custom(function = "not_blank", message = "Phone number is required"))]
  #[schema(example = "+573001234567")]
  pub phone_number: String,

  #[serde(default, deserialize_with = "lenient_string")]
  #[validate(custom(function = "not_blank", message = "Order ID is required"))]
  #[schema(example = "123")]
  pub order_id: String,

  /// PIN the client presents to claim the order
  #[serde(default, deserialize_with = "lenient_string")]
  #[validate(custom(function = "not_blank", message = "Security PIN is required"))]
  #[schema(example = "456789")]
  pub security_pin: String,

  #[serde(default, deserialize_with = "lenient_string")]
  #[validate(custom(function = "not_blank", message = "Restaurant name is required"))]
  #[schema(example = "Mi Restaurante")]
  pub restaurant_name: String,
}

impl From<OrderReadyNotificationRequest> for SendOrderReadyNotificationCommand {
  fn from(request: OrderReadyNotificationRequest) -> Self {
    Self {
      phone_number: request.phone_number,
      order_id: request.order_id,
      security_pin: request.security_pin,
      restaurant_name: request.restaurant_name,
    }
  }
}

/// Result of a notification request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
  /// Whether the SMS provider accepted the message
  pub success: bool,

  /// Provider message identifier
  #[schema(example = "SM0123456789abcdef0123456789abcdef")]
  pub message_id: Option<String>,

  /// Success text, or the reason the message was not sent
  #[schema(example = "Notification sent successfully")]
  pub message: Option<String>,
}

impl From<SendOrderReadyNotificationResponse> for NotificationResponse {
  fn from(response: SendOrderReadyNotificationResponse) -> Self {
    Self {
      success: response.success,
      message_id: response.message_id,
      message: response.message,
    }
  }
}

/// Standard error response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
  /// When the error was produced
  pub timestamp: DateTime<Utc>,

  /// HTTP status code
  #[schema(example = 400)]
  pub status: u16,

  /// Error category
  #[schema(example = "Validation Error")]
  pub error: String,

  /// Human-readable error message
  #[schema(example = "Phone number is required")]
  pub message: String,

  /// Request path that produced the error
  #[schema(example = "/api/v1/notifications/order-ready")]
  pub path: String,
}
