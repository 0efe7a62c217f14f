use std::sync::Arc;

use crate::domain::notification::entities::{NotificationMessage, NotificationResult};
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::services::NotificationService;

/// Message reported to callers when the SMS was accepted by the provider
pub const SUCCESS_MESSAGE: &str = "Notification sent successfully";

/// Command for notifying a client that their order is ready
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOrderReadyNotificationCommand {
  pub phone_number: String,
  pub order_id: String,
  pub security_pin: String,
  pub restaurant_name: String,
}

/// Response after attempting the notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOrderReadyNotificationResponse {
  /// Whether the provider accepted the message
  pub success: bool,
  /// Provider message identifier
  pub message_id: Option<String>,
  /// Success text, or the failure reason
  pub message: Option<String>,
}

impl From<SendOrderReadyNotificationCommand> for NotificationMessage {
  fn from(command: SendOrderReadyNotificationCommand) -> Self {
    Self {
      phone_number: command.phone_number,
      order_id: command.order_id,
      security_pin: command.security_pin,
      restaurant_name: command.restaurant_name,
    }
  }
}

impl From<NotificationResult> for SendOrderReadyNotificationResponse {
  fn from(result: NotificationResult) -> Self {
    let message = if result.success {
      Some(SUCCESS_MESSAGE.to_string())
    } else {
      result.error_message
    };

    Self {
      success: result.success,
      message_id: result.message_id,
      message,
    }
  }
}

/// Use case for sending the "order ready" SMS
pub struct SendOrderReadyNotificationUseCase {
  notification_service: Arc<NotificationService>,
}

impl SendOrderReadyNotificationUseCase {
  /// Creates a new instance of SendOrderReadyNotificationUseCase
  pub fn new(notification_service: Arc<NotificationService>) -> Self {
    Self {
      notification_service,
    }
  }

  /// Executes the use case
  ///
  /// # Errors
  /// Returns `NotificationError` if the command is missing required data.
  /// A failed delivery is returned as an unsuccessful response, not an error.
  pub async fn execute(
    &self,
    command: SendOrderReadyNotificationCommand,
  ) -> Result<SendOrderReadyNotificationResponse, NotificationError> {
    let message = NotificationMessage::from(command);

    let result = self
      .notification_service
      .send_order_ready_notification(&message)
      .await?;

    if !result.success {
      tracing::warn!(
        order_id = %message.order_id,
        error = result.error_message.as_deref().unwrap_or_default(),
        "Order ready notification was not delivered"
      );
    }

    Ok(result.into())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::notification::ports::SmsMessagingPort;
  use async_trait::async_trait;

  struct FixedSmsPort(NotificationResult);

  #[async_trait]
  impl SmsMessagingPort for FixedSmsPort {
    async fn send_sms(&self, _phone_number: &str, _message: &str) -> NotificationResult {
      self.0.clone()
    }
  }

  fn use_case(result: NotificationResult) -> SendOrderReadyNotificationUseCase {
    let service = Arc::new(NotificationService::new(Arc::new(FixedSmsPort(result))));
    SendOrderReadyNotificationUseCase::new(service)
  }

  fn command() -> SendOrderReadyNotificationCommand {
    SendOrderReadyNotificationCommand {
      phone_number: "+573001234567".to_string(),
      order_id: "123".to_string(),
      security_pin: "456789".to_string(),
      restaurant_name: "Mi Restaurante".to_string(),
    }
  }

  #[test]
  fn test_command_maps_fields_verbatim() {
    let command = SendOrderReadyNotificationCommand {
      phone_number: "  +573001234567  ".to_string(),
      order_id: "  123  ".to_string(),
      security_pin: "0000".to_string(),
      restaurant_name: "La Esquina".to_string(),
    };

    let message = NotificationMessage::from(command);

    assert_eq!(message.phone_number, "  +573001234567  ");
    assert_eq!(message.order_id, "  123  ");
    assert_eq!(message.security_pin, "0000");
    assert_eq!(message.restaurant_name, "La Esquina");
  }

  #[test]
  fn test_success_result_maps_to_success_message() {
    let response = SendOrderReadyNotificationResponse::from(NotificationResult::success("SM42"));

    assert!(response.success);
    assert_eq!(response.message_id.as_deref(), Some("SM42"));
    assert_eq!(response.message.as_deref(), Some(SUCCESS_MESSAGE));
  }

  #[test]
  fn test_failure_result_maps_to_error_message() {
    let response =
      SendOrderReadyNotificationResponse::from(NotificationResult::failure("Provider down"));

    assert!(!response.success);
    assert!(response.message_id.is_none());
    assert_eq!(response.message.as_deref(), Some("Provider down"));
  }

  #[tokio::test]
  async fn test_execute_returns_mapped_response() {
    let response = use_case(NotificationResult::success("MSG123"))
      .execute(command())
      .await
      .unwrap();

    assert_eq!(
      response,
      SendOrderReadyNotificationResponse {
        success: true,
        message_id: Some("MSG123".to_string()),
        message: Some(SUCCESS_MESSAGE.to_string()),
      }
    );
  }

  #[tokio::test]
  async fn test_execute_propagates_validation_errors() {
    let mut command = command();
    command.restaurant_name = " ".to_string();

    let error = use_case(NotificationResult::success("MSG123"))
      .execute(command)
      .await
      .unwrap_err();

    assert_eq!(
      error,
      NotificationError::Validation("Restaurant name is required".to_string())
    );
  }
}
