use thiserror::Error;

/// Bearer token verification errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
  #[error("Invalid token")]
  Invalid,

  #[error("Token has expired")]
  Expired,

  #[error("Token has no subject")]
  MissingSubject,

  #[error("Signing key is too weak, at least {min} bytes are required")]
  WeakKey { min: usize },
}

impl From<jsonwebtoken::errors::Error> for TokenError {
  fn from(error: jsonwebtoken::errors::Error) -> Self {
    use jsonwebtoken::errors::ErrorKind;
    match error.kind() {
      ErrorKind::ExpiredSignature => TokenError::Expired,
      _ => TokenError::Invalid,
    }
  }
}
