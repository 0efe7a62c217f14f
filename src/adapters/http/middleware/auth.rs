use actix_web::{
  Error, HttpMessage,
  body::EitherBody,
  dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
  error::ResponseError,
};
use futures_util::future::LocalBoxFuture;
use std::{
  future::{Ready, ready},
  rc::Rc,
  sync::Arc,
};

use crate::{
  adapters::http::errors::ApiError,
  domain::auth::{entities::AuthenticatedPrincipal, ports::TokenValidator},
};

const BEARER_PREFIX: &str = "Bearer ";

/// Authentication middleware for stateless JWT bearer tokens
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies it with the configured `TokenValidator`
/// 3. Attaches the `AuthenticatedPrincipal` to request extensions
/// 4. Returns 401 Unauthorized with the standard error body otherwise
///
/// # Example
///
/// ```no_run
/// use actix_web::{App, web};
/// use std::sync::Arc;
/// # use mensajeria::domain::auth::ports::TokenValidator;
/// # use mensajeria::adapters::http::middleware::auth::JwtAuthMiddleware;
///
/// # fn example(validator: Arc<dyn TokenValidator>) {
/// let app = App::new().service(
///   web::scope("/protected")
///     .wrap(JwtAuthMiddleware::new(validator))
///     .route("", web::get().to(|| async { "Protected endpoint" })),
/// );
/// # }
/// ```
pub struct JwtAuthMiddleware {
  validator: Arc<dyn TokenValidator>,
}

impl JwtAuthMiddleware {
  pub fn new(validator: Arc<dyn TokenValidator>) -> Self {
    Self { validator }
  }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuthMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Transform = JwtAuthMiddlewareService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(JwtAuthMiddlewareService {
      service: Rc::new(service),
      validator: self.validator.clone(),
    }))
  }
}

pub struct JwtAuthMiddlewareService<S> {
  service: Rc<S>,
  validator: Arc<dyn TokenValidator>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddlewareService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let service = Rc::clone(&self.service);
    let validator = self.validator.clone();

    Box::pin(async move {
      let principal = extract_bearer_token(&req)
        .and_then(|token| validator.validate(token).map_err(ApiError::from));

      let principal = match principal {
        Ok(principal) => principal,
        Err(e) => {
          tracing::debug!("Rejected request to {}: {}", req.path(), e);
          let e = e.at(req.path());
          let (request, _) = req.into_parts();
          let response = e.error_response().map_into_right_body();
          return Ok(ServiceResponse::new(request, response));
        }
      };

      req.extensions_mut().insert(principal);

      let res = service.call(req).await?;
      Ok(res.map_into_left_body())
    })
  }
}

/// Extract the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Result<&str, ApiError> {
  req
    .headers()
    .get("Authorization")
    .and_then(|h| h.to_str().ok())
    .and_then(|s| s.strip_prefix(BEARER_PREFIX))
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .ok_or_else(|| ApiError::unauthorized("Invalid or missing authorization token"))
}

/// Extension trait to read the authenticated principal from a request
pub trait PrincipalExt {
  /// Returns None if the request did not pass through `JwtAuthMiddleware`.
  fn principal(&self) -> Option<AuthenticatedPrincipal>;
}

impl PrincipalExt for actix_web::HttpRequest {
  fn principal(&self) -> Option<AuthenticatedPrincipal> {
    self.extensions().get::<AuthenticatedPrincipal>().cloned()
  }
}
