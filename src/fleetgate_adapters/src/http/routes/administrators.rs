use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use fleetgate_application::{RegisterAdministratorUseCase, UpdateAdministratorUseCase};
use fleetgate_core::{
    Administrator, AdministratorDraft, AdministratorStore, Role, VehicleStore,
};

use crate::auth::extract::AuthenticatedClaims;
use crate::http::routes::error::ApiError;
use crate::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AdministratorRequest {
    pub email: String,
    pub secret: Secret<String>,
    pub duress_secret: Secret<String>,
    pub role: String,
}

impl AdministratorRequest {
    fn into_draft(self) -> Result<AdministratorDraft, ApiError> {
        AdministratorDraft::parse(&self.email, self.secret, self.duress_secret, &self.role)
            .map_err(ApiError::from)
    }
}

/// What the API discloses about an administrator. Hashes stay inside.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdministratorView {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

impl From<Administrator> for AdministratorView {
    fn from(administrator: Administrator) -> Self {
        Self {
            id: administrator.id,
            email: administrator.email.as_str().to_string(),
            role: administrator.role,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

#[tracing::instrument(name = "Create administrator", skip(claims, state, request))]
pub async fn create_administrator<A, V>(
    claims: AuthenticatedClaims,
    State(state): State<AppState<A, V>>,
    Json(request): Json<AdministratorRequest>,
) -> Result<(StatusCode, Json<AdministratorView>), ApiError>
where
    A: AdministratorStore + Clone,
    V: VehicleStore + Clone,
{
    claims.require_role(&[Role::Admin])?;

    let draft = request.into_draft()?;
    let created = RegisterAdministratorUseCase::new(state.administrators.clone())
        .execute(draft)
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

#[tracing::instrument(name = "List administrators", skip(claims, state))]
pub async fn list_administrators<A, V>(
    claims: AuthenticatedClaims,
    State(state): State<AppState<A, V>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<AdministratorView>>, ApiError>
where
    A: AdministratorStore + Clone,
    V: VehicleStore + Clone,
{
    claims.require_role(&[Role::Admin])?;

    let administrators = state.administrators.list(query.page).await?;
    Ok(Json(
        administrators.into_iter().map(Into::into).collect(),
    ))
}

#[tracing::instrument(name = "Get administrator", skip(claims, state))]
pub async fn get_administrator<A, V>(
    claims: AuthenticatedClaims,
    State(state): State<AppState<A, V>>,
    Path(id): Path<i64>,
) -> Result<Json<AdministratorView>, ApiError>
where
    A: AdministratorStore + Clone,
    V: VehicleStore + Clone,
{
    claims.require_role(&[Role::Admin])?;

    let administrator = state
        .administrators
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("Administrator"))?;

    Ok(Json(administrator.into()))
}

#[tracing::instrument(name = "Update administrator", skip(claims, state, request))]
pub async fn update_administrator<A, V>(
    claims: AuthenticatedClaims,
    State(state): State<AppState<A, V>>,
    Path(id): Path<i64>,
    Json(request): Json<AdministratorRequest>,
) -> Result<Json<AdministratorView>, ApiError>
where
    A: AdministratorStore + Clone,
    V: VehicleStore + Clone,
{
    claims.require_role(&[Role::Admin])?;

    let draft = request.into_draft()?;
    let updated = UpdateAdministratorUseCase::new(state.administrators.clone())
        .execute(id, draft)
        .await?;

    Ok(Json(updated.into()))
}
