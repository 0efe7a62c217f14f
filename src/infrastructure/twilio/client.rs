use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::domain::notification::entities::NotificationResult;
use crate::domain::notification::errors::NotificationError;
use crate::infrastructure::config::TwilioConfig;

lazy_static! {
  /// E.164: a leading `+`, no leading zero, at most 15 digits
  static ref PHONE_NUMBER_PATTERN: Regex = Regex::new(r"^\+[1-9]\d{1,14}$").unwrap();
}

const INVALID_PHONE_NUMBER: &str = "Invalid phone number format.";

/// Errors raised while building the Twilio client
#[derive(Debug, Error)]
pub enum TwilioClientError {
  #[error("Twilio credentials are not configured")]
  MissingCredentials,

  #[error("Twilio request timeout must be at least one second")]
  InvalidTimeout,

  #[error("Failed to build HTTP client: {0}")]
  HttpClient(String),
}

/// Reasons a message could not be created
#[derive(Debug)]
enum SendError {
  /// Twilio rejected the request
  Api(String),
  /// Transport or decoding failure
  Unexpected(String),
}

/// Message resource returned by Twilio on creation
#[derive(Debug, Deserialize)]
struct MessageResource {
  sid: String,
  #[serde(default)]
  status: Option<String>,
}

/// Error body returned by Twilio for rejected requests
#[derive(Debug, Deserialize)]
struct TwilioErrorBody {
  #[serde(default)]
  code: Option<i64>,
  message: String,
}

/// Checks that a phone number is in E.164 format
pub fn validate_phone_number(phone_number: &str) -> Result<(), NotificationError> {
  if phone_number.trim().is_empty() || !PHONE_NUMBER_PATTERN.is_match(phone_number) {
    return Err(NotificationError::InvalidPhoneNumber(
      phone_number.to_string(),
    ));
  }
  Ok(())
}

/// Client for the Twilio Messages REST API
pub struct TwilioSmsClient {
  client: Client,
  account_sid: String,
  auth_token: Zeroizing<String>,
  messaging_service_sid: String,
  api_base_url: String,
}

impl TwilioSmsClient {
  /// Creates a client from configuration
  ///
  /// # Errors
  /// Returns `TwilioClientError::MissingCredentials` if the account SID or the
  /// auth token is blank, and `TwilioClientError::InvalidTimeout` if the
  /// request timeout is zero.
  pub fn new(config: &TwilioConfig) -> Result<Self, TwilioClientError> {
    if config.account_sid.trim().is_empty() || config.auth_token.trim().is_empty() {
      return Err(TwilioClientError::MissingCredentials);
    }

    if config.request_timeout_seconds == 0 {
      return Err(TwilioClientError::InvalidTimeout);
    }

    let client = Client::builder()
      .timeout(Duration::from_secs(config.request_timeout_seconds))
      .build()
      .map_err(|e| TwilioClientError::HttpClient(e.to_string()))?;

    tracing::info!("Twilio SMS client initialized successfully");

    Ok(Self {
      client,
      account_sid: config.account_sid.clone(),
      auth_token: Zeroizing::new(config.auth_token.clone()),
      messaging_service_sid: config.messaging_service_sid.clone(),
      api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
    })
  }

  /// Sends an SMS through the configured messaging service
  ///
  /// Never fails: invalid numbers, API rejections and transport errors are
  /// all reported as a failed `NotificationResult`.
  pub async fn send_sms(&self, to_phone_number: &str, message_body: &str) -> NotificationResult {
    if validate_phone_number(to_phone_number).is_err() {
      tracing::warn!(
        "Validation error - {}: {}",
        INVALID_PHONE_NUMBER,
        to_phone_number
      );
      return NotificationResult::failure(INVALID_PHONE_NUMBER);
    }

    tracing::info!("Sending SMS to: {}", to_phone_number);
    tracing::debug!("Message Service SID: {}", self.messaging_service_sid);

    match self.create_message(to_phone_number, message_body).await {
      Ok(message) => {
        tracing::info!(
          "SMS sent successfully. SID: {}, Status: {}",
          message.sid,
          message.status.as_deref().unwrap_or("unknown")
        );
        NotificationResult::success(message.sid)
      }
      Err(SendError::Api(msg)) => {
        let error = format!("Twilio API Error: {}", msg);
        tracing::error!("{}", error);
        NotificationResult::failure(error)
      }
      Err(SendError::Unexpected(msg)) => {
        let error = format!("Unexpected error sending SMS: {}", msg);
        tracing::error!("{}", error);
        NotificationResult::failure(error)
      }
    }
  }

  fn messages_url(&self) -> String {
    format!(
      "{}/2010-04-01/Accounts/{}/Messages.json",
      self.api_base_url, self.account_sid
    )
  }

  async fn create_message(&self, to: &str, body: &str) -> Result<MessageResource, SendError> {
    let response = self
      .client
      .post(self.messages_url())
      .basic_auth(&self.account_sid, Some(self.auth_token.as_str()))
      .form(&[
        ("To", to),
        ("MessagingServiceSid", self.messaging_service_sid.as_str()),
        ("Body", body),
      ])
      .send()
      .await
      .map_err(|e| SendError::Unexpected(e.to_string()))?;

    let status = response.status();

    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(match serde_json::from_str::<TwilioErrorBody>(&body) {
        Ok(error) => {
          tracing::debug!(code = ?error.code, "Twilio rejected the message");
          SendError::Api(error.message)
        }
        Err(_) => SendError::Api(format!("HTTP {}", status)),
      });
    }

    response
      .json::<MessageResource>()
      .await
      .map_err(|e| SendError::Unexpected(e.to_string()))
  }
}
