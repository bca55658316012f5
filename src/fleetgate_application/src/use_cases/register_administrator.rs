use fleetgate_core::{
    Administrator, AdministratorDraft, AdministratorStore, AdministratorStoreError,
    CredentialHasher, NewAdministrator,
};

/// Error types specific to administrator registration.
#[derive(Debug, thiserror::Error)]
pub enum RegisterAdministratorError {
    #[error("Administrator store error: {0}")]
    StoreError(#[from] AdministratorStoreError),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Registration use case - hashes both secrets of a validated draft and
/// persists the record.
///
/// The draft has already rejected equal genuine and duress secrets; this is
/// the single place the "two hashes never decode to the same plaintext"
/// invariant is established. The resolver trusts it from here on.
pub struct RegisterAdministratorUseCase<S>
where
    S: AdministratorStore,
{
    store: S,
    hasher: CredentialHasher,
}

impl<S> RegisterAdministratorUseCase<S>
where
    S: AdministratorStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            hasher: CredentialHasher,
        }
    }

    #[tracing::instrument(name = "RegisterAdministratorUseCase::execute", skip_all, fields(email = %draft.email))]
    pub async fn execute(
        &self,
        draft: AdministratorDraft,
    ) -> Result<Administrator, RegisterAdministratorError> {
        let AdministratorDraft {
            email,
            secret,
            duress_secret,
            role,
        } = draft;

        let hasher = self.hasher;
        let (secret_hash, duress_hash) = tokio::task::spawn_blocking(move || {
            (
                hasher.hash(secret.expose()),
                hasher.hash(duress_secret.expose()),
            )
        })
        .await
        .map_err(|e| RegisterAdministratorError::Unexpected(e.to_string()))?;

        let administrator = self
            .store
            .insert(NewAdministrator {
                email,
                secret_hash,
                duress_hash,
                role,
            })
            .await?;

        Ok(administrator)
    }
}
