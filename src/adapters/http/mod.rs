pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;

// Re-export commonly used types
pub use dtos::{ErrorResponse, NotificationResponse, OrderReadyNotificationRequest};
pub use errors::{ApiError, ApiErrorKind};
pub use handlers::notifications::send_order_ready_notification_handler;
pub use middleware::{
  JwtAuthMiddleware, PrincipalExt, RequestId, RequestIdExt, RequestIdMiddleware,
};
pub use openapi::ApiDoc;
pub use routes::{AppDependencies, configure_app, configure_notification_routes};
