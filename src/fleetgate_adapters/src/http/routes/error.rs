use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use fleetgate_application::{
    LoginError, RegisterAdministratorError, UpdateAdministratorError,
};
use fleetgate_core::{AdministratorStoreError, ValidationErrors, VehicleStoreError};

/// Message used for every failed login, whatever the reason. Distinguishing
/// an unknown email from a wrong secret would hand an attacker an account
/// oracle.
pub const UNAUTHORIZED_MESSAGE: &str = "Invalid email or secret";

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize)]
pub struct ValidationResponse {
    pub messages: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", UNAUTHORIZED_MESSAGE)]
    Unauthorized,

    #[error("Missing bearer token")]
    MissingToken,

    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Insufficient role")]
    Forbidden,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Already exists")]
    Conflict,

    #[error("Validation failed")]
    Validation(Vec<String>),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, body) = match self {
            ApiError::Validation(messages) => {
                return (StatusCode::BAD_REQUEST, Json(ValidationResponse { messages }))
                    .into_response();
            }

            ApiError::Unauthorized
            | ApiError::MissingToken
            | ApiError::AuthenticationError(_) => (StatusCode::UNAUTHORIZED, self.to_string()),

            ApiError::Forbidden => (StatusCode::FORBIDDEN, self.to_string()),

            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),

            ApiError::Conflict => (StatusCode::CONFLICT, self.to_string()),

            ApiError::UnexpectedError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        (status_code, Json(ErrorResponse { error: body })).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors.messages)
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            // Both credential failures collapse into one indistinguishable
            // unauthorized response.
            LoginError::UnknownAdministrator | LoginError::InvalidSecret => ApiError::Unauthorized,
            LoginError::TimedOut => ApiError::UnexpectedError("Login attempt timed out".into()),
            LoginError::StoreError(e) => ApiError::UnexpectedError(e.to_string()),
            LoginError::Unexpected(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<AdministratorStoreError> for ApiError {
    fn from(error: AdministratorStoreError) -> Self {
        match error {
            AdministratorStoreError::AlreadyExists => ApiError::Conflict,
            AdministratorStoreError::NotFound => ApiError::NotFound("Administrator"),
            AdministratorStoreError::Unexpected(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<VehicleStoreError> for ApiError {
    fn from(error: VehicleStoreError) -> Self {
        match error {
            VehicleStoreError::NotFound => ApiError::NotFound("Vehicle"),
            VehicleStoreError::Unexpected(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<RegisterAdministratorError> for ApiError {
    fn from(error: RegisterAdministratorError) -> Self {
        match error {
            RegisterAdministratorError::StoreError(e) => e.into(),
            RegisterAdministratorError::Unexpected(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<UpdateAdministratorError> for ApiError {
    fn from(error: UpdateAdministratorError) -> Self {
        match error {
            UpdateAdministratorError::NotFound => ApiError::NotFound("Administrator"),
            UpdateAdministratorError::StoreError(e) => e.into(),
            UpdateAdministratorError::Unexpected(e) => ApiError::UnexpectedError(e),
        }
    }
}
