use thiserror::Error;

/// Errors raised while parsing raw input into domain value objects.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Secret must be at least {0} characters long")]
    SecretTooShort(usize),
    #[error("Unknown role, expected Admin or Editor")]
    UnknownRole,
}
