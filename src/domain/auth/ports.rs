use super::entities::AuthenticatedPrincipal;
use super::errors::TokenError;

/// Verifies bearer tokens and resolves the principal they identify
pub trait TokenValidator: Send + Sync {
  fn validate(&self, token: &str) -> Result<AuthenticatedPrincipal, TokenError>;
}
