use secrecy::{ExposeSecret, Secret};

use crate::domain::error::DomainError;

/// Minimum length accepted when an administrator secret is created or changed.
pub const MIN_SECRET_LEN: usize = 6;

/// A plaintext administrator secret that passed creation-time validation.
///
/// Only used on the write path (registration, update). Login candidates are
/// deliberately *not* funneled through this type: a too-short candidate must
/// fail verification like any other wrong secret, not fail validation with a
/// distinguishable error.
#[derive(Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(raw: Secret<String>) -> Result<Self, DomainError> {
        if raw.expose_secret().len() < MIN_SECRET_LEN {
            return Err(DomainError::SecretTooShort(MIN_SECRET_LEN));
        }
        Ok(Self(raw))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = DomainError;

    fn try_from(raw: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimum_length() {
        assert!(Password::parse(Secret::from("123456".to_string())).is_ok());
    }

    #[test]
    fn rejects_short_secrets() {
        let result = Password::parse(Secret::from("12345".to_string()));
        assert!(matches!(result, Err(DomainError::SecretTooShort(_))));
    }

    #[test]
    fn debug_does_not_leak() {
        let password = Password::parse(Secret::from("supersecret".to_string())).unwrap();
        assert_eq!(format!("{password:?}"), "Password([REDACTED])");
    }
}
