pub mod auth;
pub mod request_id;

// Re-export middleware components for easier access
pub use auth::{JwtAuthMiddleware, PrincipalExt};
pub use request_id::{REQUEST_ID_HEADER, RequestId, RequestIdExt, RequestIdMiddleware};
