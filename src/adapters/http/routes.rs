use actix_web::web;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::notification::SendOrderReadyNotificationUseCase;
use crate::domain::auth::ports::TokenValidator;

use super::errors::json_error_handler;
use super::handlers::{health::health_check, notifications::send_order_ready_notification_handler};
use super::middleware::JwtAuthMiddleware;
use super::openapi::ApiDoc;

/// Everything the HTTP layer needs from the composition root
#[derive(Clone)]
pub struct AppDependencies {
  pub send_order_ready_use_case: Arc<SendOrderReadyNotificationUseCase>,
  pub token_validator: Arc<dyn TokenValidator>,
}

/// Configure notification routes
///
/// Mounts the notification endpoints under the provided scope
/// (e.g., /api/v1/notifications). Malformed JSON bodies are reported with
/// the standard error body.
///
/// # Routes
///
/// - POST /order-ready - Send the "order ready" SMS to a client
///
/// # Example
///
/// ```no_run
/// use actix_web::{App, web};
/// use std::sync::Arc;
/// # use mensajeria::application::notification::SendOrderReadyNotificationUseCase;
/// # use mensajeria::adapters::http::routes::configure_notification_routes;
///
/// # fn example(use_case: Arc<SendOrderReadyNotificationUseCase>) {
/// let app = App::new().service(
///   web::scope("/api/v1/notifications")
///     .configure(|cfg| configure_notification_routes(cfg, use_case)),
/// );
/// # }
/// ```
pub fn configure_notification_routes(
  cfg: &mut web::ServiceConfig,
  send_order_ready_use_case: Arc<SendOrderReadyNotificationUseCase>,
) {
  cfg
    .app_data(web::Data::new(send_order_ready_use_case))
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .route(
      "/order-ready",
      web::post().to(send_order_ready_notification_handler),
    );
}

/// Configure the whole application
///
/// # Routes
///
/// - /api/v1/notifications/* - Notification API, requires a bearer token
/// - /swagger-ui/ - Interactive API documentation
/// - /swagger-ui.html - Redirects to /swagger-ui/
/// - /api-docs/openapi.json - OpenAPI document
/// - GET /health - Liveness probe
pub fn configure_app(cfg: &mut web::ServiceConfig, deps: AppDependencies) {
  cfg
    .service(
      web::scope("/api/v1/notifications")
        .wrap(JwtAuthMiddleware::new(deps.token_validator))
        .configure(|cfg| configure_notification_routes(cfg, deps.send_order_ready_use_case)),
    )
    .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()))
    .service(web::redirect("/swagger-ui.html", "/swagger-ui/"))
    .route("/health", web::get().to(health_check));
}
