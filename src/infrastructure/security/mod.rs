mod jwt_validator;

pub use jwt_validator::{JwtTokenValidator, MIN_SECRET_LENGTH};
