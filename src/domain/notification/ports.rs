use async_trait::async_trait;

use super::entities::NotificationResult;

/// Outbound port for SMS delivery
#[async_trait]
pub trait SmsMessagingPort: Send + Sync {
  /// Sends `message` to `phone_number`
  ///
  /// Implementations never fail: provider and transport errors are reported
  /// as a failed `NotificationResult`.
  async fn send_sms(&self, phone_number: &str, message: &str) -> NotificationResult;
}
