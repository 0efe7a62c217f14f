pub mod entities;
pub mod errors;
pub mod ports;

// Re-export commonly used types
pub use entities::{AuthenticatedPrincipal, JwtClaims, ROLE_PREFIX};
pub use errors::TokenError;
pub use ports::TokenValidator;
