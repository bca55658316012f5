pub mod extract;
pub mod jwt;

pub use extract::AuthenticatedClaims;
pub use jwt::{Claims, JwtConfig, TokenError, issue_token, validate_token};
