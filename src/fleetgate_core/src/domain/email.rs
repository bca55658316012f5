use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A validated email address.
///
/// Emails are lookup keys, not secrets: they appear in API responses and in
/// token claims. Matching against the store is exact; case folding is the
/// store's policy, not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.len() < 3 || !raw.contains('@') || raw.starts_with('@') || raw.ends_with('@') {
            return Err(DomainError::InvalidEmail);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plausible_addresses() {
        assert!(Email::parse("admin@example.com").is_ok());
        assert!(Email::parse("a@b").is_ok());
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert_eq!(Email::parse("admin.example.com"), Err(DomainError::InvalidEmail));
    }

    #[test]
    fn rejects_dangling_at_sign() {
        assert_eq!(Email::parse("@example.com"), Err(DomainError::InvalidEmail));
        assert_eq!(Email::parse("admin@"), Err(DomainError::InvalidEmail));
    }

    #[test]
    fn rejects_too_short() {
        assert_eq!(Email::parse("@"), Err(DomainError::InvalidEmail));
        assert_eq!(Email::parse(""), Err(DomainError::InvalidEmail));
    }
}
