use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{NotificationResponse, OrderReadyNotificationRequest},
  errors::ApiError,
};
use crate::application::notification::SendOrderReadyNotificationUseCase;

use super::get_principal;

/// Handler for the "order ready" SMS notification
///
/// POST /api/v1/notifications/order-ready
/// Body: OrderReadyNotificationRequest (JSON)
/// Response: NotificationResponse (JSON) with status 200 when the SMS was
/// accepted, 500 when delivery failed
#[utoipa::path(
  post,
  path = "/api/v1/notifications/order-ready",
  tag = "Notifications",
  request_body = OrderReadyNotificationRequest,
  security(("bearerAuth" = [])),
  responses(
    (status = 200, description = "Notification sent", body = NotificationResponse),
    (status = 400, description = "Invalid request data", body = crate::adapters::http::dtos::ErrorResponse),
    (status = 401, description = "Missing or invalid bearer token", body = crate::adapters::http::dtos::ErrorResponse),
    (status = 500, description = "The SMS could not be delivered", body = NotificationResponse)
  )
)]
pub async fn send_order_ready_notification_handler(
  request: web::Json<OrderReadyNotificationRequest>,
  use_case: web::Data<Arc<SendOrderReadyNotificationUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let principal = get_principal(&http_req)?;

  request
    .validate()
    .map_err(|e| ApiError::from(e).at(http_req.path()))?;

  let request = request.into_inner();
  tracing::info!(
    order_id = %request.order_id,
    requested_by = %principal.email,
    "Sending order ready notification"
  );

  let response = use_case
    .execute(request.into())
    .await
    .map_err(|e| ApiError::from(e).at(http_req.path()))?;

  let body = NotificationResponse::from(response);
  if body.success {
    Ok(HttpResponse::Ok().json(body))
  } else {
    Ok(HttpResponse::InternalServerError().json(body))
  }
}
