/// Health check endpoint
///
/// GET /health
#[utoipa::path(
  get,
  path = "/health",
  tag = "Health",
  responses((status = 200, description = "Service is up", body = String))
)]
pub async fn health_check() -> &'static str {
  "OK"
}
