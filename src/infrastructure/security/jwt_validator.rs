use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use zeroize::Zeroizing;

use crate::domain::auth::entities::{AuthenticatedPrincipal, JwtClaims};
use crate::domain::auth::errors::TokenError;
use crate::domain::auth::ports::TokenValidator;

/// HMAC-SHA keys shorter than this are rejected
pub const MIN_SECRET_LENGTH: usize = 32;

/// Verifies HMAC-signed bearer tokens issued by the upstream user service
pub struct JwtTokenValidator {
  key: DecodingKey,
  validation: Validation,
}

impl JwtTokenValidator {
  /// Creates a validator from the shared secret
  ///
  /// The key is the UTF-8 bytes of `secret`. HS256, HS384 and HS512
  /// signatures are accepted.
  ///
  /// # Errors
  /// Returns `TokenError::WeakKey` if the secret is shorter than 32 bytes.
  pub fn new(secret: &str) -> Result<Self, TokenError> {
    let secret = Zeroizing::new(secret.as_bytes().to_vec());

    if secret.len() < MIN_SECRET_LENGTH {
      return Err(TokenError::WeakKey {
        min: MIN_SECRET_LENGTH,
      });
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
    validation.leeway = 0;
    validation.validate_aud = false;
    // Tokens without `exp` are accepted; when present it is enforced
    validation.required_spec_claims.clear();

    Ok(Self {
      key: DecodingKey::from_secret(&secret),
      validation,
    })
  }

  fn claims(&self, token: &str) -> Result<JwtClaims, TokenError> {
    let data = decode::<JwtClaims>(token, &self.key, &self.validation)?;
    Ok(data.claims)
  }

  /// Returns the subject (email) of a valid token
  pub fn extract_email(&self, token: &str) -> Option<String> {
    self.claims(token).ok().and_then(|c| c.sub)
  }

  /// Returns the `role` claim of a valid token
  pub fn extract_role(&self, token: &str) -> Option<String> {
    self.claims(token).ok().and_then(|c| c.role)
  }

  /// Returns the `userId` claim of a valid token
  pub fn extract_user_id(&self, token: &str) -> Option<i64> {
    self.claims(token).ok().and_then(|c| c.user_id)
  }

  /// Whether the token has a valid signature and has not expired
  pub fn is_token_valid(&self, token: &str) -> bool {
    self.claims(token).is_ok()
  }
}

impl TokenValidator for JwtTokenValidator {
  fn validate(&self, token: &str) -> Result<AuthenticatedPrincipal, TokenError> {
    let claims = self.claims(token)?;

    let email = claims
      .sub
      .filter(|s| !s.trim().is_empty())
      .ok_or(TokenError::MissingSubject)?;

    Ok(AuthenticatedPrincipal::new(
      email,
      claims.role.as_deref(),
      claims.user_id,
    ))
  }
}
