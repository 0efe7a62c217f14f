use actix_web::{App, HttpServer, middleware::Logger};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mensajeria::{
  adapters::http::{AppDependencies, RequestIdMiddleware, configure_app},
  application::notification::SendOrderReadyNotificationUseCase,
  domain::{auth::ports::TokenValidator, notification::NotificationService},
  infrastructure::{
    config::Config,
    security::JwtTokenValidator,
    twilio::{TwilioSmsAdapter, TwilioSmsClient},
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mensajeria=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting Mensajeria notification service");

  // Load configuration
  let config = Config::load().map_err(|e| {
    tracing::error!("Failed to load configuration: {}", e);
    std::io::Error::new(
      std::io::ErrorKind::InvalidInput,
      format!("Invalid configuration: {}", e),
    )
  })?;
  tracing::info!("Configuration loaded successfully");

  // Initialize security components
  let token_validator: Arc<dyn TokenValidator> = Arc::new(
    JwtTokenValidator::new(&config.security.jwt_secret).map_err(|e| {
      tracing::error!("Failed to initialize JWT validator: {}", e);
      std::io::Error::new(
        std::io::ErrorKind::InvalidInput,
        format!("Invalid JWT secret: {}", e),
      )
    })?,
  );

  // Initialize the SMS provider
  let twilio_client = Arc::new(TwilioSmsClient::new(&config.twilio).map_err(|e| {
    tracing::error!("Failed to initialize Twilio client: {}", e);
    std::io::Error::other(format!("Twilio client error: {}", e))
  })?);
  tracing::info!(
    messaging_service_sid = %config.twilio.messaging_service_sid,
    "Twilio client initialized"
  );

  // Initialize domain services and use cases
  let notification_service = Arc::new(NotificationService::new(Arc::new(
    TwilioSmsAdapter::new(twilio_client),
  )));
  let send_order_ready_use_case = Arc::new(SendOrderReadyNotificationUseCase::new(
    notification_service,
  ));

  let deps = AppDependencies {
    send_order_ready_use_case,
    token_validator,
  };

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    let deps = deps.clone();
    App::new()
      // Request ID must wrap Logger so the span covers access logs
      .wrap(Logger::default())
      .wrap(RequestIdMiddleware::new())
      .configure(|cfg| configure_app(cfg, deps))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}
