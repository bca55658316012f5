//! Bearer token issuance and validation.
//!
//! Tokens are HS256-signed JWTs carrying the administrator's email and role.
//! The duress indicator is deliberately absent from the claims: it must reach
//! only the immediate caller of login, never an artifact a third party could
//! inspect later.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use fleetgate_core::{AuthenticatedAdministrator, Role};

#[derive(Clone)]
pub struct JwtConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("No signing key configured")]
    MissingSigningKey,
    #[error("Token error: {0}")]
    TokenError(jsonwebtoken::errors::Error),
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Administrator email.
    pub sub: String,
    /// Role claim consumed by the authorization gate.
    pub role: Role,
    pub exp: usize,
}

/// Issue a signed bearer token for an authenticated administrator.
///
/// Fails with [`TokenError::MissingSigningKey`] when no key is configured;
/// an unsigned token must never be handed out as if issuance succeeded.
pub fn issue_token(
    administrator: &AuthenticatedAdministrator,
    config: &JwtConfig,
) -> Result<String, TokenError> {
    let secret = config.jwt_secret.expose_secret();
    if secret.is_empty() {
        return Err(TokenError::MissingSigningKey);
    }

    let delta = chrono::Duration::try_seconds(config.token_ttl_in_seconds).ok_or(
        TokenError::UnexpectedError("Failed to create token duration".to_string()),
    )?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(TokenError::UnexpectedError(
            "Duration out of range".to_string(),
        ))?
        .timestamp();

    let exp: usize = exp
        .try_into()
        .map_err(|_| TokenError::UnexpectedError("Failed to cast i64 to usize".to_string()))?;

    let claims = Claims {
        sub: administrator.email.as_str().to_string(),
        role: administrator.role,
        exp,
    };

    encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(TokenError::TokenError)
}

/// Check a bearer token's signature and expiry and extract its claims.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<Claims, TokenError> {
    let secret = config.jwt_secret.expose_secret();
    if secret.is_empty() {
        return Err(TokenError::MissingSigningKey);
    }

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(TokenError::TokenError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetgate_core::Email;

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            jwt_secret: Secret::from("secret".to_owned()),
            token_ttl_in_seconds: 86_400,
        }
    }

    fn administrator(via_duress: bool) -> AuthenticatedAdministrator {
        AuthenticatedAdministrator {
            id: 1,
            email: Email::parse("admin@example.com").unwrap(),
            role: Role::Admin,
            via_duress,
        }
    }

    #[test]
    fn issued_token_carries_email_and_role() {
        let config = jwt_config();
        let token = issue_token(&administrator(false), &config).unwrap();
        assert_eq!(token.split('.').count(), 3);

        let claims = validate_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "admin@example.com");
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn expiry_is_roughly_one_day_out() {
        let config = jwt_config();
        let token = issue_token(&administrator(false), &config).unwrap();
        let claims = validate_token(&token, &config).unwrap();

        let expected = (Utc::now().timestamp() + 86_400) as usize;
        assert!(claims.exp.abs_diff(expected) < 60);
    }

    #[test]
    fn duress_indicator_never_reaches_the_claims() {
        let config = jwt_config();
        let token = issue_token(&administrator(true), &config).unwrap();
        let claims = validate_token(&token, &config).unwrap();

        let json = serde_json::to_value(&claims).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert!(!keys.iter().any(|k| k.to_lowercase().contains("duress")));

        // Tokens for genuine and duress logins are structurally identical.
        let genuine = validate_token(&issue_token(&administrator(false), &config).unwrap(), &config)
            .unwrap();
        assert_eq!(
            serde_json::to_value(&genuine).unwrap().as_object().unwrap().len(),
            json.as_object().unwrap().len()
        );
    }

    #[test]
    fn empty_signing_key_fails_issuance() {
        let config = JwtConfig {
            jwt_secret: Secret::from(String::new()),
            token_ttl_in_seconds: 86_400,
        };
        let result = issue_token(&administrator(false), &config);
        assert!(matches!(result, Err(TokenError::MissingSigningKey)));
    }

    #[test]
    fn tampered_token_fails_validation() {
        let config = jwt_config();
        let token = issue_token(&administrator(false), &config).unwrap();

        let other = JwtConfig {
            jwt_secret: Secret::from("other-secret".to_owned()),
            token_ttl_in_seconds: 86_400,
        };
        assert!(validate_token(&token, &other).is_err());
        assert!(validate_token("not.a.token", &config).is_err());
    }
}
