pub mod health;
pub mod notifications;

use actix_web::HttpRequest;

use crate::{
  adapters::http::{errors::ApiError, middleware::PrincipalExt},
  domain::auth::entities::AuthenticatedPrincipal,
};

/// Extract the authenticated principal from request extensions
pub fn get_principal(req: &HttpRequest) -> Result<AuthenticatedPrincipal, ApiError> {
  req.principal().ok_or_else(|| {
    ApiError::unauthorized("Invalid or missing authorization token").at(req.path())
  })
}
