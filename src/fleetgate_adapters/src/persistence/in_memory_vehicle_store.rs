use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use fleetgate_core::{
    PAGE_SIZE, Vehicle, VehicleDraft, VehicleFilter, VehicleStore, VehicleStoreError,
};

use crate::persistence::page_offset;

#[derive(Default)]
struct State {
    rows: BTreeMap<i64, Vehicle>,
    next_id: i64,
}

/// In-memory vehicle store, used in tests and for running the service
/// without a database.
#[derive(Default, Clone)]
pub struct InMemoryVehicleStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryVehicleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(vehicle: &Vehicle, filter: &VehicleFilter) -> bool {
    let contains = |haystack: &str, needle: &Option<String>| {
        needle.as_ref().is_none_or(|n| {
            haystack.to_lowercase().contains(&n.to_lowercase())
        })
    };

    contains(&vehicle.name, &filter.name)
        && contains(&vehicle.make, &filter.make)
        && contains(&vehicle.model, &filter.model)
        && filter.year.is_none_or(|y| vehicle.year == y)
}

#[async_trait::async_trait]
impl VehicleStore for InMemoryVehicleStore {
    async fn insert(&self, draft: VehicleDraft) -> Result<Vehicle, VehicleStoreError> {
        let mut state = self.state.write().await;
        state.next_id += 1;
        let vehicle = Vehicle {
            id: state.next_id,
            name: draft.name,
            make: draft.make,
            model: draft.model,
            year: draft.year,
        };
        state.rows.insert(vehicle.id, vehicle.clone());
        Ok(vehicle)
    }

    async fn update(&self, vehicle: Vehicle) -> Result<(), VehicleStoreError> {
        let mut state = self.state.write().await;
        if !state.rows.contains_key(&vehicle.id) {
            return Err(VehicleStoreError::NotFound);
        }
        state.rows.insert(vehicle.id, vehicle);
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, VehicleStoreError> {
        let state = self.state.read().await;
        Ok(state.rows.get(&id).cloned())
    }

    async fn list(
        &self,
        page: Option<u32>,
        filter: &VehicleFilter,
    ) -> Result<Vec<Vehicle>, VehicleStoreError> {
        let state = self.state.read().await;
        let rows = state.rows.values().filter(|v| matches(v, filter)).cloned();
        Ok(match page_offset(page) {
            Some(offset) => rows
                .skip(offset as usize)
                .take(PAGE_SIZE as usize)
                .collect(),
            None => rows.collect(),
        })
    }

    async fn delete(&self, id: i64) -> Result<(), VehicleStoreError> {
        let mut state = self.state.write().await;
        state
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(VehicleStoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, make: &str, model: &str, year: i32) -> VehicleDraft {
        VehicleDraft::parse(name, make, model, year).unwrap()
    }

    async fn seeded_store() -> InMemoryVehicleStore {
        let store = InMemoryVehicleStore::new();
        store.insert(draft("Kombi", "Volkswagen", "T2", 1975)).await.unwrap();
        store.insert(draft("Fusca", "Volkswagen", "Beetle", 1968)).await.unwrap();
        store.insert(draft("Mustang", "Ford", "GT", 1968)).await.unwrap();
        store
    }

    #[tokio::test]
    async fn filter_matches_substrings_case_insensitively() {
        let store = seeded_store().await;
        let filter = VehicleFilter {
            make: Some("volks".to_string()),
            ..Default::default()
        };
        let vehicles = store.list(None, &filter).await.unwrap();
        assert_eq!(vehicles.len(), 2);
    }

    #[tokio::test]
    async fn filter_matches_year_exactly() {
        let store = seeded_store().await;
        let filter = VehicleFilter {
            year: Some(1968),
            ..Default::default()
        };
        let vehicles = store.list(None, &filter).await.unwrap();
        assert_eq!(vehicles.len(), 2);

        let filter = VehicleFilter {
            year: Some(1968),
            make: Some("Ford".to_string()),
            ..Default::default()
        };
        let vehicles = store.list(None, &filter).await.unwrap();
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].name, "Mustang");
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let store = seeded_store().await;
        store.delete(1).await.unwrap();
        assert!(store.find_by_id(1).await.unwrap().is_none());
        assert_eq!(store.delete(1).await.unwrap_err(), VehicleStoreError::NotFound);
    }

    #[tokio::test]
    async fn listing_paginates_by_ten() {
        let store = InMemoryVehicleStore::new();
        for i in 0..11 {
            store
                .insert(draft(&format!("Car {i}"), "Make", "Model", 2000 + i))
                .await
                .unwrap();
        }
        assert_eq!(
            store.list(Some(1), &VehicleFilter::default()).await.unwrap().len(),
            10
        );
        assert_eq!(
            store.list(Some(2), &VehicleFilter::default()).await.unwrap().len(),
            1
        );
    }
}
