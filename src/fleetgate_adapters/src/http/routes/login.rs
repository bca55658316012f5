use axum::{Json, extract::State};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use fleetgate_application::LoginUseCase;
use fleetgate_core::{AdministratorStore, Email, Role, VehicleStore};

use crate::auth::jwt::issue_token;
use crate::config::constants::limits::LOGIN_TIMEOUT;
use crate::http::routes::error::ApiError;
use crate::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub secret: Secret<String>,
}

/// Success body of a login.
///
/// `duress` tells the immediate caller which secret matched; it is returned
/// here and nowhere else - in particular, never inside the token.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub id: i64,
    pub email: String,
    pub role: Role,
    pub token: String,
    pub duress: bool,
}

/// Anonymous login route.
///
/// Every failure to authenticate - unknown email or wrong secret alike -
/// returns the same unauthorized response.
#[tracing::instrument(name = "Login", skip(state, request))]
pub async fn login<A, V>(
    State(state): State<AppState<A, V>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError>
where
    A: AdministratorStore + Clone,
    V: VehicleStore + Clone,
{
    // An email that does not even parse gets the same response as one that
    // is not on record.
    let email = Email::parse(request.email).map_err(|_| ApiError::Unauthorized)?;

    let use_case = LoginUseCase::new(state.administrators.clone());
    let administrator = use_case
        .execute_with_timeout(email, request.secret, LOGIN_TIMEOUT)
        .await?;

    let token = issue_token(&administrator, &state.jwt)
        .map_err(|e| ApiError::UnexpectedError(e.to_string()))?;

    Ok(Json(LoginResponse {
        id: administrator.id,
        email: administrator.email.as_str().to_string(),
        role: administrator.role,
        token,
        duress: administrator.via_duress,
    }))
}
