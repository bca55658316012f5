//! Axum extractor gating protected routes on a valid bearer token.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use fleetgate_core::Role;

use crate::auth::jwt::{Claims, JwtConfig, validate_token};
use crate::http::routes::error::ApiError;

const BEARER_PREFIX: &str = "Bearer ";

/// Claims extracted from a verified `Authorization: Bearer` header.
///
/// Handlers call [`require_role`](Self::require_role) to narrow access
/// further; extraction alone only proves the caller holds a valid token.
#[derive(Debug, Clone)]
pub struct AuthenticatedClaims(pub Claims);

impl AuthenticatedClaims {
    pub fn require_role(&self, allowed: &[Role]) -> Result<(), ApiError> {
        if allowed.contains(&self.0.role) {
            Ok(())
        } else {
            Err(ApiError::Forbidden)
        }
    }
}

impl<S> FromRequestParts<S> for AuthenticatedClaims
where
    S: Send + Sync,
    JwtConfig: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = JwtConfig::from_ref(state);

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .ok_or(ApiError::MissingToken)?;

        let claims = validate_token(token, &config)
            .map_err(|e| ApiError::AuthenticationError(e.to_string()))?;

        Ok(Self(claims))
    }
}
