use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use fleetgate_core::{
    Administrator, AdministratorStore, AdministratorStoreError, Email, NewAdministrator, PAGE_SIZE,
};

use crate::persistence::page_offset;

#[derive(Default)]
struct State {
    rows: BTreeMap<i64, Administrator>,
    next_id: i64,
}

/// In-memory administrator store, used in tests and for running the service
/// without a database.
#[derive(Default, Clone)]
pub struct InMemoryAdministratorStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryAdministratorStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl AdministratorStore for InMemoryAdministratorStore {
    async fn insert(
        &self,
        administrator: NewAdministrator,
    ) -> Result<Administrator, AdministratorStoreError> {
        let mut state = self.state.write().await;
        if state.rows.values().any(|a| a.email == administrator.email) {
            return Err(AdministratorStoreError::AlreadyExists);
        }
        state.next_id += 1;
        let administrator = Administrator {
            id: state.next_id,
            email: administrator.email,
            secret_hash: administrator.secret_hash,
            duress_hash: administrator.duress_hash,
            role: administrator.role,
        };
        state.rows.insert(administrator.id, administrator.clone());
        Ok(administrator)
    }

    async fn update(&self, administrator: Administrator) -> Result<(), AdministratorStoreError> {
        let mut state = self.state.write().await;
        if !state.rows.contains_key(&administrator.id) {
            return Err(AdministratorStoreError::NotFound);
        }
        state.rows.insert(administrator.id, administrator);
        Ok(())
    }

    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Administrator>, AdministratorStoreError> {
        let state = self.state.read().await;
        Ok(state.rows.values().find(|a| &a.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Administrator>, AdministratorStoreError> {
        let state = self.state.read().await;
        Ok(state.rows.get(&id).cloned())
    }

    async fn list(&self, page: Option<u32>) -> Result<Vec<Administrator>, AdministratorStoreError> {
        let state = self.state.read().await;
        let rows = state.rows.values().cloned();
        Ok(match page_offset(page) {
            Some(offset) => rows
                .skip(offset as usize)
                .take(PAGE_SIZE as usize)
                .collect(),
            None => rows.collect(),
        })
    }

    async fn count(&self) -> Result<i64, AdministratorStoreError> {
        let state = self.state.read().await;
        Ok(state.rows.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetgate_core::Role;

    fn new_administrator(email: &str) -> NewAdministrator {
        NewAdministrator {
            email: Email::parse(email).unwrap(),
            secret_hash: "100000.c2FsdA==.a2V5".to_string(),
            duress_hash: "100000.c2FsdA==.ZHVyZXNz".to_string(),
            role: Role::Editor,
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = InMemoryAdministratorStore::new();
        let first = store.insert(new_administrator("a@example.com")).await.unwrap();
        let second = store.insert(new_administrator("b@example.com")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = InMemoryAdministratorStore::new();
        store.insert(new_administrator("a@example.com")).await.unwrap();
        let result = store.insert(new_administrator("a@example.com")).await;
        assert_eq!(result.unwrap_err(), AdministratorStoreError::AlreadyExists);
    }

    #[tokio::test]
    async fn email_lookup_is_exact() {
        let store = InMemoryAdministratorStore::new();
        store.insert(new_administrator("a@example.com")).await.unwrap();
        let email = Email::parse("A@example.com").unwrap();
        assert!(store.find_by_email(&email).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn listing_paginates_by_ten() {
        let store = InMemoryAdministratorStore::new();
        for i in 0..12 {
            store
                .insert(new_administrator(&format!("admin{i}@example.com")))
                .await
                .unwrap();
        }
        assert_eq!(store.list(Some(1)).await.unwrap().len(), 10);
        assert_eq!(store.list(Some(2)).await.unwrap().len(), 2);
        assert_eq!(store.list(None).await.unwrap().len(), 12);
        assert!(store.list(Some(3)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_of_missing_record_fails() {
        let store = InMemoryAdministratorStore::new();
        let inserted = store.insert(new_administrator("a@example.com")).await.unwrap();
        let mut ghost = inserted.clone();
        ghost.id = 99;
        assert_eq!(
            store.update(ghost).await.unwrap_err(),
            AdministratorStoreError::NotFound
        );
    }
}
