use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

fn default_twilio_api_base_url() -> String {
  "https://api.twilio.com".to_string()
}

fn default_twilio_request_timeout() -> u64 {
  10
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub server: ServerConfig,
  pub security: SecurityConfig,
  pub twilio: TwilioConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

/// Security configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
  /// HMAC secret shared with the service that issues the bearer tokens
  /// (at least 32 bytes)
  pub jwt_secret: String,
}

/// Twilio configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TwilioConfig {
  #[serde(default)]
  pub account_sid: String,
  #[serde(default)]
  pub auth_token: String,
  #[serde(default)]
  pub messaging_service_sid: String,
  /// Base URL of the Twilio REST API, overridable for testing
  #[serde(default = "default_twilio_api_base_url")]
  pub api_base_url: String,
  #[serde(default = "default_twilio_request_timeout")]
  pub request_timeout_seconds: u64,
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Configuration is loaded in the following order (later sources override earlier ones):
  /// 1. config/default.toml
  /// 2. config/local.toml (if exists)
  /// 3. config/{RUN_MODE}.toml (if exists)
  /// 4. Environment variables with MENSAJERIA_ prefix
  ///
  /// # Environment Variables
  ///
  /// Environment variables use the MENSAJERIA_ prefix and are separated by double underscores:
  /// - `MENSAJERIA_SERVER__PORT=8080`
  /// - `MENSAJERIA_SECURITY__JWT_SECRET=...`
  /// - `MENSAJERIA_TWILIO__ACCOUNT_SID=AC...`
  /// - `MENSAJERIA_TWILIO__AUTH_TOKEN=...`
  /// - `MENSAJERIA_TWILIO__MESSAGING_SERVICE_SID=MG...`
  ///
  /// # Errors
  ///
  /// Returns a `ConfigError` if config/default.toml is missing, a file
  /// contains invalid TOML, or a required value is missing or mistyped.
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(true))
      .add_source(File::with_name("config/local").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      // Use double underscore as separator: MENSAJERIA_SERVER__PORT=8080
      .add_source(
        Environment::with_prefix("MENSAJERIA")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    config.try_deserialize()
  }
}
