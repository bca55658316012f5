pub mod domain;
pub mod hashing;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    administrator::{
        Administrator, AdministratorDraft, AuthenticatedAdministrator, NewAdministrator,
    },
    email::Email,
    error::DomainError,
    role::Role,
    secret::Password,
    validation::ValidationErrors,
    vehicle::{Vehicle, VehicleDraft},
};

pub use hashing::CredentialHasher;

pub use ports::repositories::{
    AdministratorStore, AdministratorStoreError, VehicleFilter, VehicleStore, VehicleStoreError,
    PAGE_SIZE,
};
