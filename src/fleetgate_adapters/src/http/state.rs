use axum::extract::FromRef;

use fleetgate_core::{AdministratorStore, VehicleStore};

use crate::auth::jwt::JwtConfig;

/// Shared state handed to every route handler.
///
/// Stores are `Clone` via internal `Arc`s (or connection pools), so cloning
/// the state per request is cheap.
#[derive(Clone)]
pub struct AppState<A, V>
where
    A: AdministratorStore + Clone,
    V: VehicleStore + Clone,
{
    pub administrators: A,
    pub vehicles: V,
    pub jwt: JwtConfig,
}

impl<A, V> AppState<A, V>
where
    A: AdministratorStore + Clone,
    V: VehicleStore + Clone,
{
    pub fn new(administrators: A, vehicles: V, jwt: JwtConfig) -> Self {
        Self {
            administrators,
            vehicles,
            jwt,
        }
    }
}

impl<A, V> FromRef<AppState<A, V>> for JwtConfig
where
    A: AdministratorStore + Clone,
    V: VehicleStore + Clone,
{
    fn from_ref(state: &AppState<A, V>) -> JwtConfig {
        state.jwt.clone()
    }
}
