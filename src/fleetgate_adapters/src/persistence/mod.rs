pub mod in_memory_administrator_store;
pub mod in_memory_vehicle_store;
pub mod postgres_administrator_store;
pub mod postgres_vehicle_store;

pub use in_memory_administrator_store::InMemoryAdministratorStore;
pub use in_memory_vehicle_store::InMemoryVehicleStore;
pub use postgres_administrator_store::PostgresAdministratorStore;
pub use postgres_vehicle_store::PostgresVehicleStore;

/// Turns a 1-based page number into a row offset; `None` means "everything".
pub(crate) fn page_offset(page: Option<u32>) -> Option<i64> {
    page.map(|p| (i64::from(p.max(1)) - 1) * fleetgate_core::PAGE_SIZE)
}
