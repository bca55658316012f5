use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    administrator::{Administrator, NewAdministrator},
    email::Email,
    vehicle::{Vehicle, VehicleDraft},
};

/// Records per page for every paginated listing. Listing without a page
/// number returns everything.
pub const PAGE_SIZE: i64 = 10;

// AdministratorStore port trait and errors
#[derive(Debug, Error)]
pub enum AdministratorStoreError {
    #[error("Administrator already exists")]
    AlreadyExists,
    #[error("Administrator not found")]
    NotFound,
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl PartialEq for AdministratorStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::AlreadyExists, Self::AlreadyExists)
                | (Self::NotFound, Self::NotFound)
                | (Self::Unexpected(_), Self::Unexpected(_))
        )
    }
}

#[async_trait]
pub trait AdministratorStore: Send + Sync {
    async fn insert(
        &self,
        administrator: NewAdministrator,
    ) -> Result<Administrator, AdministratorStoreError>;

    /// Replaces the record with `administrator.id` wholesale.
    async fn update(&self, administrator: Administrator) -> Result<(), AdministratorStoreError>;

    /// Exact-match lookup; case sensitivity is this store's policy.
    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Administrator>, AdministratorStoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Administrator>, AdministratorStoreError>;

    /// Lists administrators ordered by id; `page` is 1-based.
    async fn list(&self, page: Option<u32>) -> Result<Vec<Administrator>, AdministratorStoreError>;

    async fn count(&self) -> Result<i64, AdministratorStoreError>;
}

// VehicleStore port trait and errors
#[derive(Debug, Error)]
pub enum VehicleStoreError {
    #[error("Vehicle not found")]
    NotFound,
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl PartialEq for VehicleStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::NotFound, Self::NotFound) | (Self::Unexpected(_), Self::Unexpected(_))
        )
    }
}

/// Optional narrowing of a vehicle listing. Text fields match as
/// case-insensitive substrings, year matches exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleFilter {
    pub name: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
}

#[async_trait]
pub trait VehicleStore: Send + Sync {
    async fn insert(&self, draft: VehicleDraft) -> Result<Vehicle, VehicleStoreError>;

    async fn update(&self, vehicle: Vehicle) -> Result<(), VehicleStoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, VehicleStoreError>;

    /// Lists vehicles ordered by id; `page` is 1-based.
    async fn list(
        &self,
        page: Option<u32>,
        filter: &VehicleFilter,
    ) -> Result<Vec<Vehicle>, VehicleStoreError>;

    async fn delete(&self, id: i64) -> Result<(), VehicleStoreError>;
}
