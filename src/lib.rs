//! # Fleetgate - Vehicle Manager Backend Library
//!
//! This is a facade crate that re-exports the public APIs of the fleetgate
//! components. Use it to get access to the whole backend in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Role`, `Administrator`, `Vehicle`
//! - **Credential hashing**: `CredentialHasher`
//! - **Repository traits**: `AdministratorStore`, `VehicleStore`
//! - **Use cases**: `LoginUseCase`, `RegisterAdministratorUseCase`, etc.
//! - **Adapters**: stores, JWT issuing/validation, configuration, HTTP routes
//! - **Service**: `FleetgateService` - router assembly and server entry point

/// Core domain types, credential hashing and port traits
pub mod core {
    pub use fleetgate_core::*;
}

// Re-export most commonly used core types at the root level
pub use fleetgate_core::{
    Administrator, AuthenticatedAdministrator, CredentialHasher, DomainError, Email, Password,
    Role, ValidationErrors, Vehicle, VehicleDraft,
};

/// Repository trait definitions
pub mod repositories {
    pub use fleetgate_core::{
        AdministratorStore, AdministratorStoreError, VehicleStore, VehicleStoreError,
    };
}

pub use fleetgate_core::{
    AdministratorStore, AdministratorStoreError, VehicleStore, VehicleStoreError,
};

/// Application use cases
pub mod use_cases {
    pub use fleetgate_application::*;
}

pub use fleetgate_application::{
    LoginUseCase, RegisterAdministratorUseCase, UpdateAdministratorUseCase,
};

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers and error mapping
    pub mod http {
        pub use fleetgate_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use fleetgate_adapters::persistence::*;
    }

    /// JWT issuing and validation
    pub mod auth {
        pub use fleetgate_adapters::auth::*;
    }

    /// Configuration
    pub mod config {
        pub use fleetgate_adapters::config::*;
    }
}

pub use fleetgate_adapters::persistence::{
    InMemoryAdministratorStore, InMemoryVehicleStore, PostgresAdministratorStore,
    PostgresVehicleStore,
};

/// Main service entry point
pub use fleetgate_service::FleetgateService;

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
