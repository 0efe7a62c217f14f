use actix_web::{
  HttpRequest, HttpResponse,
  error::{JsonPayloadError, ResponseError},
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::auth::errors::TokenError;
use crate::domain::notification::errors::NotificationError;

use super::dtos::ErrorResponse;

const DEFAULT_VALIDATION_MESSAGE: &str = "Input data validation error";

/// API error kinds and their HTTP mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// Illegal argument rejected by the domain (400 Bad Request)
  BadRequest(String),

  /// Request payload failed validation (400 Bad Request)
  Validation(String),

  /// Missing or invalid bearer token (401 Unauthorized)
  Unauthorized(String),

  /// Anything unexpected (500 Internal Server Error)
  Internal(String),
}

/// API error type that maps domain errors to the standard error body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
  pub kind: ApiErrorKind,
  /// Request path reported in the body
  pub path: Option<String>,
}

impl ApiError {
  pub fn new(kind: ApiErrorKind) -> Self {
    Self { kind, path: None }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(ApiErrorKind::BadRequest(message.into()))
  }

  pub fn validation(message: impl Into<String>) -> Self {
    Self::new(ApiErrorKind::Validation(message.into()))
  }

  pub fn unauthorized(message: impl Into<String>) -> Self {
    Self::new(ApiErrorKind::Unauthorized(message.into()))
  }

  pub fn internal(message: impl Into<String>) -> Self {
    Self::new(ApiErrorKind::Internal(message.into()))
  }

  /// Attaches the request path reported in the error body
  pub fn at(mut self, path: impl Into<String>) -> Self {
    self.path = Some(path.into());
    self
  }

  /// Error category shown in the `error` field
  pub fn title(&self) -> &'static str {
    match self.kind {
      ApiErrorKind::BadRequest(_) => "Bad Request",
      ApiErrorKind::Validation(_) => "Validation Error",
      ApiErrorKind::Unauthorized(_) => "Unauthorized",
      ApiErrorKind::Internal(_) => "Internal Server Error",
    }
  }

  /// Message shown in the `message` field
  pub fn message(&self) -> String {
    match &self.kind {
      ApiErrorKind::BadRequest(msg)
      | ApiErrorKind::Validation(msg)
      | ApiErrorKind::Unauthorized(msg) => msg.clone(),
      ApiErrorKind::Internal(msg) => format!("An unexpected error occurred: {}", msg),
    }
  }

  /// Builds the error body for this error
  pub fn to_body(&self) -> ErrorResponse {
    ErrorResponse {
      timestamp: chrono::Utc::now(),
      status: self.status_code().as_u16(),
      error: self.title().to_string(),
      message: self.message(),
      path: self.path.clone().unwrap_or_default(),
    }
  }
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.title(), self.message())
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self.kind {
      ApiErrorKind::BadRequest(_) | ApiErrorKind::Validation(_) => StatusCode::BAD_REQUEST,
      ApiErrorKind::Unauthorized(_) => StatusCode::UNAUTHORIZED,
      ApiErrorKind::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    if let ApiErrorKind::Internal(msg) = &self.kind {
      tracing::error!("Internal error: {}", msg);
    }

    HttpResponse::build(self.status_code())
      .content_type(ContentType::json())
      .json(self.to_body())
  }
}

/// Convert NotificationError to ApiError
impl From<NotificationError> for ApiError {
  fn from(error: NotificationError) -> Self {
    match error {
      NotificationError::Validation(msg) => ApiError::bad_request(msg),
      err @ NotificationError::InvalidPhoneNumber(_) => ApiError::bad_request(err.to_string()),
    }
  }
}

/// Convert TokenError to ApiError
impl From<TokenError> for ApiError {
  fn from(error: TokenError) -> Self {
    match error {
      TokenError::WeakKey { .. } => ApiError::internal(error.to_string()),
      TokenError::Invalid | TokenError::Expired | TokenError::MissingSubject => {
        ApiError::unauthorized("Invalid or missing authorization token")
      }
    }
  }
}

/// Convert validation errors from validator crate
///
/// Reports the lexicographically first field message so the response does
/// not depend on field iteration order.
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let mut messages: Vec<String> = errors
      .field_errors()
      .values()
      .flat_map(|errors| errors.iter())
      .filter_map(|error| error.message.as_ref().map(|m| m.to_string()))
      .collect();
    messages.sort();

    let message = messages
      .into_iter()
      .next()
      .unwrap_or_else(|| DEFAULT_VALIDATION_MESSAGE.to_string());

    ApiError::validation(message)
  }
}

/// Error handler for JSON bodies that cannot be read
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
  tracing::debug!("Rejected request body: {}", err);
  ApiError::validation(format!("Malformed request body: {}", err))
    .at(req.path())
    .into()
}

#[cfg(test)]
mod tests {
  use super::*;
  use validator::Validate;

  use crate::adapters::http::dtos::OrderReadyNotificationRequest;

  #[test]
  fn test_api_error_status_codes() {
    assert_eq!(
      ApiError::bad_request("test").status_code(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(
      ApiError::validation("test").status_code(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(
      ApiError::unauthorized("test").status_code(),
      StatusCode::UNAUTHORIZED
    );
    assert_eq!(
      ApiError::internal("test").status_code(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
  }

  #[test]
  fn test_bad_request_body() {
    let before = chrono::Utc::now();
    let body = ApiError::bad_request("Invalid argument provided")
      .at("/api/v1/notifications")
      .to_body();
    let after = chrono::Utc::now();

    assert_eq!(body.status, 400);
    assert_eq!(body.error, "Bad Request");
    assert_eq!(body.message, "Invalid argument provided");
    assert_eq!(body.path, "/api/v1/notifications");
    assert!(body.timestamp >= before && body.timestamp <= after);
  }

  #[test]
  fn test_internal_error_body() {
    let body = ApiError::internal("boom").to_body();

    assert_eq!(body.status, 500);
    assert_eq!(body.error, "Internal Server Error");
    assert_eq!(body.message, "An unexpected error occurred: boom");
  }

  #[test]
  fn test_notification_error_conversion() {
    let api_error: ApiError = NotificationError::validation("Phone number is required").into();

    assert_eq!(api_error, ApiError::bad_request("Phone number is required"));
  }

  #[test]
  fn test_token_error_conversion() {
    let api_error: ApiError = TokenError::Expired.into();
    assert_eq!(api_error.status_code(), StatusCode::UNAUTHORIZED);

    let api_error: ApiError = TokenError::WeakKey { min: 32 }.into();
    assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn test_validation_errors_report_first_sorted_message() {
    let request = OrderReadyNotificationRequest {
      phone_number: String::new(),
      order_id: String::new(),
      security_pin: "456789".to_string(),
      restaurant_name: "Mi Restaurante".to_string(),
    };

    let api_error: ApiError = request.validate().unwrap_err().into();

    assert_eq!(api_error, ApiError::validation("Order ID is required"));
    assert_eq!(api_error.title(), "Validation Error");
  }

  #[test]
  fn test_empty_validation_errors_use_default_message() {
    let api_error: ApiError = validator::ValidationErrors::new().into();

    assert_eq!(api_error.message(), DEFAULT_VALIDATION_MESSAGE);
  }
}
