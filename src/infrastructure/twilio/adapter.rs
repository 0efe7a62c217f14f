use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::notification::entities::NotificationResult;
use crate::domain::notification::ports::SmsMessagingPort;

use super::client::TwilioSmsClient;

/// `SmsMessagingPort` backed by Twilio
pub struct TwilioSmsAdapter {
  client: Arc<TwilioSmsClient>,
}

impl TwilioSmsAdapter {
  pub fn new(client: Arc<TwilioSmsClient>) -> Self {
    Self { client }
  }
}

#[async_trait]
impl SmsMessagingPort for TwilioSmsAdapter {
  async fn send_sms(&self, phone_number: &str, message: &str) -> NotificationResult {
    self.client.send_sms(phone_number, message).await
  }
}
