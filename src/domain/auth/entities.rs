use serde::{Deserialize, Serialize};

/// Prefix applied to token roles to form granted authorities
pub const ROLE_PREFIX: &str = "ROLE_";

/// Claims carried by the bearer tokens issued by the upstream user service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
  /// Subject, the user's email address
  #[serde(default)]
  pub sub: Option<String>,

  #[serde(default)]
  pub role: Option<String>,

  #[serde(default, rename = "userId")]
  pub user_id: Option<i64>,

  /// Expiration as seconds since the Unix epoch
  #[serde(default)]
  pub exp: Option<u64>,
}

/// Identity attached to a request once its bearer token has been verified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedPrincipal {
  pub email: String,
  pub user_id: Option<i64>,
  pub authorities: Vec<String>,
}

impl AuthenticatedPrincipal {
  /// Builds a principal from a subject and an optional role
  ///
  /// The role becomes a single `ROLE_`-prefixed authority.
  pub fn new(email: impl Into<String>, role: Option<&str>, user_id: Option<i64>) -> Self {
    let authorities = role
      .filter(|r| !r.trim().is_empty())
      .map(|r| vec![format!("{}{}", ROLE_PREFIX, r)])
      .unwrap_or_default();

    Self {
      email: email.into(),
      user_id,
      authorities,
    }
  }

  pub fn has_authority(&self, authority: &str) -> bool {
    self.authorities.iter().any(|a| a == authority)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_role_is_prefixed() {
    let principal = AuthenticatedPrincipal::new("user@example.com", Some("DRIVER"), Some(7));

    assert_eq!(principal.email, "user@example.com");
    assert_eq!(principal.user_id, Some(7));
    assert!(principal.has_authority("ROLE_DRIVER"));
    assert!(!principal.has_authority("DRIVER"));
  }

  #[test]
  fn test_missing_role_grants_nothing() {
    let principal = AuthenticatedPrincipal::new("user@example.com", None, None);
    assert!(principal.authorities.is_empty());

    let principal = AuthenticatedPrincipal::new("user@example.com", Some("  "), None);
    assert!(principal.authorities.is_empty());
  }

  #[test]
  fn test_claims_use_camel_case_user_id() {
    let json = r#"{"sub": "user@example.com", "role": "CLIENT", "userId": 42}"#;
    let claims: JwtClaims = serde_json::from_str(json).unwrap();

    assert_eq!(claims.sub.as_deref(), Some("user@example.com"));
    assert_eq!(claims.role.as_deref(), Some("CLIENT"));
    assert_eq!(claims.user_id, Some(42));
    assert_eq!(claims.exp, None);
  }
}
