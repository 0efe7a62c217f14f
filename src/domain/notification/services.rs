use std::sync::Arc;

use super::entities::{NotificationMessage, NotificationResult};
use super::errors::NotificationError;
use super::ports::SmsMessagingPort;

/// Renders the SMS body sent when an order is ready for pickup
pub fn order_ready_message(order_id: &str, restaurant_name: &str, security_pin: &str) -> String {
  format!(
    "Hello! Your order #{} at {} is READY for pickup. Your security PIN is: {}. \
     Please present this PIN to the employee to claim your order.",
    order_id, restaurant_name, security_pin
  )
}

/// Domain service for client notifications
pub struct NotificationService {
  sms_port: Arc<dyn SmsMessagingPort>,
}

impl NotificationService {
  pub fn new(sms_port: Arc<dyn SmsMessagingPort>) -> Self {
    Self { sms_port }
  }

  /// Notifies a client that their order is ready for pickup
  ///
  /// # Errors
  /// Returns `NotificationError::Validation` if any field is blank. The SMS
  /// port is not called in that case. Delivery failures are not errors; they
  /// come back as a failed `NotificationResult`.
  pub async fn send_order_ready_notification(
    &self,
    message: &NotificationMessage,
  ) -> Result<NotificationResult, NotificationError> {
    Self::validate(message)?;

    let body = order_ready_message(
      &message.order_id,
      &message.restaurant_name,
      &message.security_pin,
    );

    tracing::debug!(order_id = %message.order_id, "Sending order ready notification");

    Ok(self.sms_port.send_sms(&message.phone_number, &body).await)
  }

  fn validate(message: &NotificationMessage) -> Result<(), NotificationError> {
    let required = [
      (&message.phone_number, "Phone number is required"),
      (&message.security_pin, "Security PIN is required"),
      (&message.order_id, "Order ID is required"),
      (&message.restaurant_name, "Restaurant name is required"),
    ];

    match required.iter().find(|(value, _)| value.trim().is_empty()) {
      Some((_, error)) => Err(NotificationError::validation(*error)),
      None => Ok(()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use async_trait::async_trait;
  use std::sync::Mutex;

  const PHONE_NUMBER: &str = "+573001234567";
  const ORDER_ID: &str = "123";
  const SECURITY_PIN: &str = "456789";
  const RESTAURANT_NAME: &str = "Mi Restaurante";

  /// Records every call and answers with a canned result
  struct RecordingSmsPort {
    result: NotificationResult,
    calls: Mutex<Vec<(String, String)>>,
  }

  impl RecordingSmsPort {
    fn new(result: NotificationResult) -> Arc<Self> {
      Arc::new(Self {
        result,
        calls: Mutex::new(Vec::new()),
      })
    }

    fn calls(&self) -> Vec<(String, String)> {
      self.calls.lock().unwrap().clone()
    }
  }

  #[async_trait]
  impl SmsMessagingPort for RecordingSmsPort {
    async fn send_sms(&self, phone_number: &str, message: &str) -> NotificationResult {
      self
        .calls
        .lock()
        .unwrap()
        .push((phone_number.to_string(), message.to_string()));
      self.result.clone()
    }
  }

  fn valid_message() -> NotificationMessage {
    NotificationMessage {
      phone_number: PHONE_NUMBER.to_string(),
      order_id: ORDER_ID.to_string(),
      security_pin: SECURITY_PIN.to_string(),
      restaurant_name: RESTAURANT_NAME.to_string(),
    }
  }

  #[tokio::test]
  async fn test_sends_notification_successfully() {
    let port = RecordingSmsPort::new(NotificationResult::success("MSG123"));
    let service = NotificationService::new(port.clone());

    let result = service
      .send_order_ready_notification(&valid_message())
      .await
      .unwrap();

    assert!(result.is_success());
    assert_eq!(result.message_id.as_deref(), Some("MSG123"));

    let calls = port.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, PHONE_NUMBER);
  }

  #[tokio::test]
  async fn test_formats_message_with_order_details() {
    let port = RecordingSmsPort::new(NotificationResult::success("MSG123"));
    let service = NotificationService::new(port.clone());

    service
      .send_order_ready_notification(&valid_message())
      .await
      .unwrap();

    let (_, body) = &port.calls()[0];
    assert_eq!(
      body,
      "Hello! Your order #123 at Mi Restaurante is READY for pickup. \
       Your security PIN is: 456789. \
       Please present this PIN to the employee to claim your order."
    );
  }

  #[tokio::test]
  async fn test_returns_failure_result_when_messaging_fails() {
    let port = RecordingSmsPort::new(NotificationResult::failure("Failed to send message"));
    let service = NotificationService::new(port);

    let result = service
      .send_order_ready_notification(&valid_message())
      .await
      .unwrap();

    assert!(!result.is_success());
    assert_eq!(
      result.error_message.as_deref(),
      Some("Failed to send message")
    );
  }

  #[tokio::test]
  async fn test_rejects_blank_fields_without_sending() {
    let cases: [(fn(&mut NotificationMessage), &str); 4] = [
      (|m| m.phone_number = "   ".into(), "Phone number is required"),
      (|m| m.security_pin = String::new(), "Security PIN is required"),
      (|m| m.order_id = "\t".into(), "Order ID is required"),
      (|m| m.restaurant_name = String::new(), "Restaurant name is required"),
    ];

    for (blank, expected) in cases {
      let port = RecordingSmsPort::new(NotificationResult::success("MSG123"));
      let service = NotificationService::new(port.clone());
      let mut message = valid_message();
      blank(&mut message);

      let error = service
        .send_order_ready_notification(&message)
        .await
        .unwrap_err();

      assert_eq!(error, NotificationError::Validation(expected.to_string()));
      assert!(port.calls().is_empty());
    }
  }

  #[tokio::test]
  async fn test_phone_number_is_checked_before_other_fields() {
    let port = RecordingSmsPort::new(NotificationResult::success("MSG123"));
    let service = NotificationService::new(port);
    let message = NotificationMessage {
      phone_number: String::new(),
      order_id: String::new(),
      security_pin: String::new(),
      restaurant_name: String::new(),
    };

    let error = service
      .send_order_ready_notification(&message)
      .await
      .unwrap_err();

    assert_eq!(error.to_string(), "Phone number is required");
  }
}
