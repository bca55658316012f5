use std::time::Duration;

use secrecy::{ExposeSecret, Secret};

use fleetgate_core::{
    Administrator, AdministratorStore, AdministratorStoreError, AuthenticatedAdministrator,
    CredentialHasher, Email,
};

/// Well-formed hash of no secret anyone knows. Verified against on the
/// unknown-email path so that both failure outcomes pay one PBKDF2 derivation
/// and stay indistinguishable by timing.
const UNKNOWN_ADMINISTRATOR_HASH: &str =
    "100000.AAAAAAAAAAAAAAAAAAAAAA==.AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";

/// Which of the two stored secrets a login candidate matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretMatch {
    Duress,
    Genuine,
    NoMatch,
}

/// Resolves a candidate secret against the two stored hashes.
///
/// The duress hash is checked first, deliberately: a coerced administrator
/// supplying the decoy gets exactly the success path an observer expects,
/// even in the degenerate case where both slots were somehow fed the same
/// plaintext. Exactly one verification attempt per slot, no retries.
pub fn resolve_secret(
    hasher: CredentialHasher,
    duress_hash: &str,
    secret_hash: &str,
    candidate: &str,
) -> SecretMatch {
    if hasher.verify(duress_hash, candidate) {
        SecretMatch::Duress
    } else if hasher.verify(secret_hash, candidate) {
        SecretMatch::Genuine
    } else {
        SecretMatch::NoMatch
    }
}

/// Error types specific to the login use case.
///
/// `UnknownAdministrator` and `InvalidSecret` are kept apart here for the
/// resolver's own bookkeeping; the HTTP boundary folds both into one
/// identical unauthorized response.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Unknown administrator")]
    UnknownAdministrator,
    #[error("Invalid secret")]
    InvalidSecret,
    #[error("Login attempt timed out")]
    TimedOut,
    #[error("Administrator store error: {0}")]
    StoreError(#[from] AdministratorStoreError),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Login use case - resolves an (email, secret) pair to an authenticated
/// administrator, distinguishing genuine from duress logins.
pub struct LoginUseCase<S>
where
    S: AdministratorStore,
{
    store: S,
    hasher: CredentialHasher,
}

impl<S> LoginUseCase<S>
where
    S: AdministratorStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            hasher: CredentialHasher,
        }
    }

    /// Execute the login use case.
    ///
    /// Looks the administrator up by exact email, then verifies the supplied
    /// secret against the duress hash first and the genuine hash second.
    /// Verification runs on the blocking pool; key derivation is expensive by
    /// construction and must not stall the reactor during login bursts.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, secret))]
    pub async fn execute(
        &self,
        email: Email,
        secret: Secret<String>,
    ) -> Result<AuthenticatedAdministrator, LoginError> {
        let administrator = self.store.find_by_email(&email).await?;
        let hasher = self.hasher;
        let candidate = secret.expose_secret().clone();

        let Some(administrator) = administrator else {
            // Burn the same derivation cost as the found path before failing.
            tokio::task::spawn_blocking(move || {
                hasher.verify(UNKNOWN_ADMINISTRATOR_HASH, &candidate)
            })
            .await
            .map_err(|e| LoginError::Unexpected(e.to_string()))?;
            return Err(LoginError::UnknownAdministrator);
        };

        let Administrator {
            id,
            email,
            secret_hash,
            duress_hash,
            role,
        } = administrator;

        let outcome = tokio::task::spawn_blocking(move || {
            resolve_secret(hasher, &duress_hash, &secret_hash, &candidate)
        })
        .await
        .map_err(|e| LoginError::Unexpected(e.to_string()))?;

        match outcome {
            SecretMatch::Duress => Ok(AuthenticatedAdministrator {
                id,
                email,
                role,
                via_duress: true,
            }),
            SecretMatch::Genuine => Ok(AuthenticatedAdministrator {
                id,
                email,
                role,
                via_duress: false,
            }),
            SecretMatch::NoMatch => Err(LoginError::InvalidSecret),
        }
    }

    /// Same as [`execute`](Self::execute) under a caller-imposed deadline.
    ///
    /// Nothing is persisted during login, so a timeout leaves no partial
    /// state behind.
    pub async fn execute_with_timeout(
        &self,
        email: Email,
        secret: Secret<String>,
        deadline: Duration,
    ) -> Result<AuthenticatedAdministrator, LoginError> {
        tokio::time::timeout(deadline, self.execute(email, secret))
            .await
            .map_err(|_| LoginError::TimedOut)?
    }
}
