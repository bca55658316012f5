use fleetgate_core::{
    Administrator, AdministratorDraft, AdministratorStore, AdministratorStoreError,
    CredentialHasher,
};

/// Error types specific to administrator updates.
#[derive(Debug, thiserror::Error)]
pub enum UpdateAdministratorError {
    #[error("Administrator not found")]
    NotFound,
    #[error("Administrator store error: {0}")]
    StoreError(#[from] AdministratorStoreError),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Update use case - replaces an existing administrator record with a freshly
/// validated draft, rehashing both secrets.
pub struct UpdateAdministratorUseCase<S>
where
    S: AdministratorStore,
{
    store: S,
    hasher: CredentialHasher,
}

impl<S> UpdateAdministratorUseCase<S>
where
    S: AdministratorStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            hasher: CredentialHasher,
        }
    }

    #[tracing::instrument(name = "UpdateAdministratorUseCase::execute", skip(self, draft))]
    pub async fn execute(
        &self,
        id: i64,
        draft: AdministratorDraft,
    ) -> Result<Administrator, UpdateAdministratorError> {
        let existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(UpdateAdministratorError::NotFound)?;

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
        .map_err(|e| UpdateAdministratorError::Unexpected(e.to_string()))?;

        let updated = Administrator {
            id: existing.id,
            email,
            secret_hash,
            duress_hash,
            role,
        };

        self.store.update(updated.clone()).await?;

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::register_administrator::RegisterAdministratorUseCase;
    use async_trait::async_trait;
    use fleetgate_core::{Email, NewAdministrator, Role};
    use secrecy::Secret;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct FakeAdministratorStore {
        rows: Arc<Mutex<HashMap<i64, Administrator>>>,
    }

    #[async_trait]
    impl AdministratorStore for FakeAdministratorStore {
        async fn insert(
            &self,
            administrator: NewAdministrator,
        ) -> Result<Administrator, AdministratorStoreError> {
            let mut rows = self.rows.lock().unwrap();
            let id = rows.len() as i64 + 1;
            let administrator = Administrator {
                id,
                email: administrator.email,
                secret_hash: administrator.secret_hash,
                duress_hash: administrator.duress_hash,
                role: administrator.role,
            };
            rows.insert(id, administrator.clone());
            Ok(administrator)
        }

        async fn update(
            &self,
            administrator: Administrator,
        ) -> Result<(), AdministratorStoreError> {
            let mut rows = self.rows.lock().unwrap();
            if !rows.contains_key(&administrator.id) {
                return Err(AdministratorStoreError::NotFound);
            }
            rows.insert(administrator.id, administrator);
            Ok(())
        }

        async fn find_by_email(
            &self,
            email: &Email,
        ) -> Result<Option<Administrator>, AdministratorStoreError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.values().find(|a| &a.email == email).cloned())
        }

        async fn find_by_id(
            &self,
            id: i64,
        ) -> Result<Option<Administrator>, AdministratorStoreError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.get(&id).cloned())
        }

        async fn list(
            &self,
            _page: Option<u32>,
        ) -> Result<Vec<Administrator>, AdministratorStoreError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.values().cloned().collect())
        }

        async fn count(&self) -> Result<i64, AdministratorStoreError> {
            Ok(self.rows.lock().unwrap().len() as i64)
        }
    }

    fn draft(email: &str, secret: &str, duress: &str) -> AdministratorDraft {
        AdministratorDraft::parse(
            email,
            Secret::from(secret.to_string()),
            Secret::from(duress.to_string()),
            "Editor",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn registration_hashes_both_secrets() {
        let store = FakeAdministratorStore::default();
        let use_case = RegisterAdministratorUseCase::new(store.clone());

        let created = use_case
            .execute(draft("editor@example.com", "RealPass1", "DecoyPass1"))
            .await
            .unwrap();

        assert_eq!(created.role, Role::Editor);
        let hasher = CredentialHasher;
        assert!(hasher.verify(&created.secret_hash, "RealPass1"));
        assert!(hasher.verify(&created.duress_hash, "DecoyPass1"));
        assert_ne!(created.secret_hash, created.duress_hash);
    }

    #[tokio::test]
    async fn update_rehashes_and_replaces() {
        let store = FakeAdministratorStore::default();
        let created = RegisterAdministratorUseCase::new(store.clone())
            .execute(draft("editor@example.com", "RealPass1", "DecoyPass1"))
            .await
            .unwrap();

        let updated = UpdateAdministratorUseCase::new(store.clone())
            .execute(created.id, draft("editor@example.com", "NewPass99", "NewDecoy99"))
            .await
            .unwrap();

        let hasher = CredentialHasher;
        assert!(hasher.verify(&updated.secret_hash, "NewPass99"));
        assert!(!hasher.verify(&updated.secret_hash, "RealPass1"));

        let stored = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.secret_hash, updated.secret_hash);
    }

    #[tokio::test]
    async fn update_of_missing_record_fails() {
        let store = FakeAdministratorStore::default();
        let result = UpdateAdministratorUseCase::new(store)
            .execute(42, draft("editor@example.com", "RealPass1", "DecoyPass1"))
            .await;
        assert!(matches!(result, Err(UpdateAdministratorError::NotFound)));
    }
}
