use secrecy::{ExposeSecret, Secret};

use crate::domain::{
    email::Email, role::Role, secret::Password, validation::ValidationErrors,
};

/// Persisted administrator record as the store hands it out.
///
/// Carries the two stored credential hashes in the self-describing
/// `iterations.salt.subkey` format. The two hashes must never derive from the
/// same plaintext; that invariant is enforced where records are created and
/// updated ([`AdministratorDraft::parse`]), never re-checked at login.
#[derive(Debug, Clone)]
pub struct Administrator {
    pub id: i64,
    pub email: Email,
    /// Hash of the genuine secret.
    pub secret_hash: String,
    /// Hash of the duress (decoy) secret.
    pub duress_hash: String,
    pub role: Role,
}

/// A record ready for insertion; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewAdministrator {
    pub email: Email,
    pub secret_hash: String,
    pub duress_hash: String,
    pub role: Role,
}

/// Outcome of a successful login.
///
/// Ephemeral by design: lives for the duration of the login call and the
/// token issuance that follows, and is never persisted or serialized.
/// `via_duress` tells the immediate caller which of the two secrets matched;
/// it must not travel any further than the login response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAdministrator {
    pub id: i64,
    pub email: Email,
    pub role: Role,
    pub via_duress: bool,
}

/// Validated input for creating or replacing an administrator record.
///
/// Secrets are still plaintext here; hashing happens in the registration and
/// update use cases.
#[derive(Debug)]
pub struct AdministratorDraft {
    pub email: Email,
    pub secret: Password,
    pub duress_secret: Password,
    pub role: Role,
}

impl AdministratorDraft {
    /// Validates raw request fields, collecting every violation.
    pub fn parse(
        email: &str,
        secret: Secret<String>,
        duress_secret: Secret<String>,
        role: &str,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let parsed_email = match Email::parse(email) {
            Ok(email) => Some(email),
            Err(_) => {
                errors.push("The email is required and must be a valid address");
                None
            }
        };

        let equal_secrets = secret.expose_secret() == duress_secret.expose_secret();

        let parsed_secret = match Password::parse(secret) {
            Ok(secret) => Some(secret),
            Err(_) => {
                errors.push("The secret is required and must be at least 6 characters");
                None
            }
        };

        let parsed_duress = match Password::parse(duress_secret) {
            Ok(secret) => Some(secret),
            Err(_) => {
                errors.push("The duress secret is required and must be at least 6 characters");
                None
            }
        };

        if equal_secrets {
            errors.push("The secret and the duress secret must not be equal");
        }

        let parsed_role = match role.parse::<Role>() {
            Ok(role) => Some(role),
            Err(_) => {
                errors.push("The role must be Admin or Editor");
                None
            }
        };

        match (parsed_email, parsed_secret, parsed_duress, parsed_role) {
            (Some(email), Some(secret), Some(duress_secret), Some(role)) if errors.is_empty() => {
                Ok(Self {
                    email,
                    secret,
                    duress_secret,
                    role,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(raw: &str) -> Secret<String> {
        Secret::from(raw.to_string())
    }

    #[test]
    fn accepts_valid_draft() {
        let draft = AdministratorDraft::parse(
            "admin@example.com",
            secret("RealPass1"),
            secret("DecoyPass1"),
            "Admin",
        )
        .unwrap();
        assert_eq!(draft.email.as_str(), "admin@example.com");
        assert_eq!(draft.role, Role::Admin);
    }

    #[test]
    fn rejects_equal_secrets() {
        let errors = AdministratorDraft::parse(
            "admin@example.com",
            secret("SamePass1"),
            secret("SamePass1"),
            "Admin",
        )
        .unwrap_err();
        assert!(
            errors
                .messages
                .iter()
                .any(|m| m.contains("must not be equal"))
        );
    }

    #[test]
    fn collects_every_violation() {
        let errors = AdministratorDraft::parse("bad", secret("a"), secret("b"), "Root").unwrap_err();
        assert_eq!(errors.messages.len(), 4);
    }

    #[test]
    fn rejects_unknown_role() {
        let errors = AdministratorDraft::parse(
            "admin@example.com",
            secret("RealPass1"),
            secret("DecoyPass1"),
            "Superuser",
        )
        .unwrap_err();
        assert_eq!(errors.messages, vec!["The role must be Admin or Editor"]);
    }
}
