use actix_web::{
  Error, HttpMessage,
  body::MessageBody,
  dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
  http::header::{HeaderName, HeaderValue},
};
use futures_util::future::LocalBoxFuture;
use std::{
  future::{Ready, ready},
  rc::Rc,
};
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID middleware
///
/// Reuses the caller's `X-Request-ID` when it is a valid UUID so a
/// notification can be correlated with the upstream request that triggered
/// it; otherwise a new UUID v4 is generated. The id is stored in request
/// extensions, recorded on a tracing span around the request and echoed in
/// the response headers.
#[derive(Debug, Clone, Default)]
pub struct RequestIdMiddleware;

impl RequestIdMiddleware {
  pub fn new() -> Self {
    Self
  }
}

impl<S, B> Transform<S, ServiceRequest> for RequestIdMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: MessageBody + 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Transform = RequestIdMiddlewareService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(RequestIdMiddlewareService {
      service: Rc::new(service),
    }))
  }
}

pub struct RequestIdMiddlewareService<S> {
  service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestIdMiddlewareService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: MessageBody + 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let service = Rc::clone(&self.service);

    let request_id = req
      .headers()
      .get(REQUEST_ID_HEADER)
      .and_then(|h| h.to_str().ok())
      .and_then(|s| Uuid::parse_str(s).ok())
      .map(RequestId)
      .unwrap_or_default();

    req.extensions_mut().insert(request_id);

    let span = tracing::info_span!(
      "request",
      request_id = %request_id,
      method = %req.method(),
      path = %req.path()
    );

    Box::pin(
      async move {
        let mut res = service.call(req).await?;

        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
          res
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        }

        Ok(res)
      }
      .instrument(span),
    )
  }
}

/// Request ID stored in request extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl RequestId {
  pub fn new() -> Self {
    Self(Uuid::new_v4())
  }

  pub fn value(&self) -> Uuid {
    self.0
  }
}

impl Default for RequestId {
  fn default() -> Self {
    Self::new()
  }
}

impl std::fmt::Display for RequestId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Extension trait to read the request ID from a request
pub trait RequestIdExt {
  /// Returns None if `RequestIdMiddleware` is not configured.
  fn request_id(&self) -> Option<RequestId>;
}

impl RequestIdExt for actix_web::HttpRequest {
  fn request_id(&self) -> Option<RequestId> {
    self.extensions().get::<RequestId>().copied()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{
    App, HttpRequest, HttpResponse,
    test::{self, TestRequest},
    web,
  };

  async fn echo_request_id(req: HttpRequest) -> HttpResponse {
    match req.request_id() {
      Some(id) => HttpResponse::Ok().body(id.to_string()),
      None => HttpResponse::InternalServerError().finish(),
    }
  }

  #[actix_web::test]
  async fn test_generates_request_id() {
    let app = test::init_service(
      App::new()
        .wrap(RequestIdMiddleware::new())
        .route("/", web::get().to(echo_request_id)),
    )
    .await;

    let resp = test::call_service(&app, TestRequest::get().uri("/").to_request()).await;

    let header = resp
      .headers()
      .get(REQUEST_ID_HEADER)
      .unwrap()
      .to_str()
      .unwrap()
      .to_string();
    assert!(Uuid::parse_str(&header).is_ok());

    // The handler sees the same id that is returned to the client
    let body = test::read_body(resp).await;
    assert_eq!(body, header.as_str());
  }

  #[actix_web::test]
  async fn test_propagates_incoming_request_id() {
    let app = test::init_service(
      App::new()
        .wrap(RequestIdMiddleware::new())
        .route("/", web::get().to(echo_request_id)),
    )
    .await;
    let incoming = Uuid::new_v4().to_string();

    let req = TestRequest::get()
      .uri("/")
      .insert_header((REQUEST_ID_HEADER, incoming.as_str()))
      .to_request();
    let resp = test::call_service(&app, req).await;

    let header = resp.headers().get(REQUEST_ID_HEADER).unwrap().to_str().unwrap();
    assert_eq!(header, incoming);
  }

  #[actix_web::test]
  async fn test_replaces_malformed_request_id() {
    let app = test::init_service(
      App::new()
        .wrap(RequestIdMiddleware::new())
        .route("/", web::get().to(echo_request_id)),
    )
    .await;

    let req = TestRequest::get()
      .uri("/")
      .insert_header((REQUEST_ID_HEADER, "not-a-uuid"))
      .to_request();
    let resp = test::call_service(&app, req).await;

    let header = resp.headers().get(REQUEST_ID_HEADER).unwrap().to_str().unwrap();
    assert_ne!(header, "not-a-uuid");
    assert!(Uuid::parse_str(header).is_ok());
  }

  #[test]
  fn test_request_ids_are_unique() {
    assert_ne!(RequestId::new().value(), RequestId::new().value());
  }
}
