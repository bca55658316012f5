use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use fleetgate_core::{
    AdministratorStore, Role, Vehicle, VehicleDraft, VehicleFilter, VehicleStore,
};

use crate::auth::extract::AuthenticatedClaims;
use crate::http::routes::error::ApiError;
use crate::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct VehicleRequest {
    pub name: String,
    pub make: String,
    pub model: String,
    pub year: i32,
}

impl VehicleRequest {
    fn into_draft(self) -> Result<VehicleDraft, ApiError> {
        VehicleDraft::parse(&self.name, &self.make, &self.model, self.year)
            .map_err(ApiError::from)
    }
}

#[derive(Debug, Deserialize)]
pub struct VehicleQuery {
    pub page: Option<u32>,
    pub name: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
}

impl VehicleQuery {
    fn filter(&self) -> VehicleFilter {
        VehicleFilter {
            name: self.name.clone(),
            make: self.make.clone(),
            model: self.model.clone(),
            year: self.year,
        }
    }
}

#[tracing::instrument(name = "Create vehicle", skip(claims, state, request))]
pub async fn create_vehicle<A, V>(
    claims: AuthenticatedClaims,
    State(state): State<AppState<A, V>>,
    Json(request): Json<VehicleRequest>,
) -> Result<(StatusCode, Json<Vehicle>), ApiError>
where
    A: AdministratorStore + Clone,
    V: VehicleStore + Clone,
{
    claims.require_role(&[Role::Admin, Role::Editor])?;

    let draft = request.into_draft()?;
    let vehicle = state.vehicles.insert(draft).await?;

    Ok((StatusCode::CREATED, Json(vehicle)))
}

#[tracing::instrument(name = "List vehicles", skip(claims, state))]
pub async fn list_vehicles<A, V>(
    claims: AuthenticatedClaims,
    State(state): State<AppState<A, V>>,
    Query(query): Query<VehicleQuery>,
) -> Result<Json<Vec<Vehicle>>, ApiError>
where
    A: AdministratorStore + Clone,
    V: VehicleStore + Clone,
{
    claims.require_role(&[Role::Admin, Role::Editor])?;

    let vehicles = state.vehicles.list(query.page, &query.filter()).await?;
    Ok(Json(vehicles))
}

#[tracing::instrument(name = "Get vehicle", skip(claims, state))]
pub async fn get_vehicle<A, V>(
    claims: AuthenticatedClaims,
    State(state): State<AppState<A, V>>,
    Path(id): Path<i64>,
) -> Result<Json<Vehicle>, ApiError>
where
    A: AdministratorStore + Clone,
    V: VehicleStore + Clone,
{
    claims.require_role(&[Role::Admin, Role::Editor])?;

    let vehicle = state
        .vehicles
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("Vehicle"))?;

    Ok(Json(vehicle))
}

#[tracing::instrument(name = "Update vehicle", skip(claims, state, request))]
pub async fn update_vehicle<A, V>(
    claims: AuthenticatedClaims,
    State(state): State<AppState<A, V>>,
    Path(id): Path<i64>,
    Json(request): Json<VehicleRequest>,
) -> Result<Json<Vehicle>, ApiError>
where
    A: AdministratorStore + Clone,
    V: VehicleStore + Clone,
{
    claims.require_role(&[Role::Admin])?;

    let existing = state
        .vehicles
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("Vehicle"))?;

    let draft = request.into_draft()?;
    let vehicle = Vehicle {
        id: existing.id,
        name: draft.name,
        make: draft.make,
        model: draft.model,
        year: draft.year,
    };
    state.vehicles.update(vehicle.clone()).await?;

    Ok(Json(vehicle))
}

#[tracing::instrument(name = "Delete vehicle", skip(claims, state))]
pub async fn delete_vehicle<A, V>(
    claims: AuthenticatedClaims,
    State(state): State<AppState<A, V>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
    A: AdministratorStore + Clone,
    V: VehicleStore + Clone,
{
    claims.require_role(&[Role::Admin])?;

    state.vehicles.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
