//! OpenAPI documentation for the REST API

use utoipa::{
  Modify, OpenApi,
  openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use super::dtos::{ErrorResponse, NotificationResponse, OrderReadyNotificationRequest};
use super::handlers::{health, notifications};

/// Name of the bearer token security scheme
pub const BEARER_AUTH: &str = "bearerAuth";

#[derive(OpenApi)]
#[openapi(
  info(
    title = "Mensajeria API",
    version = "1.0.0",
    description = "SMS notifications for restaurant order pickup"
  ),
  paths(
    notifications::send_order_ready_notification_handler,
    health::health_check,
  ),
  components(schemas(OrderReadyNotificationRequest, NotificationResponse, ErrorResponse)),
  modifiers(&SecurityAddon),
  tags(
    (name = "Notifications", description = "Client SMS notifications"),
    (name = "Health", description = "Service liveness")
  )
)]
pub struct ApiDoc;

/// Registers the JWT bearer scheme referenced by protected operations
struct SecurityAddon;

impl Modify for SecurityAddon {
  fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
    if let Some(components) = openapi.components.as_mut() {
      components.add_security_scheme(
        BEARER_AUTH,
        SecurityScheme::Http(
          HttpBuilder::new()
            .scheme(HttpAuthScheme::Bearer)
            .bearer_format("JWT")
            .build(),
        ),
      );
    }
  }
}
