pub mod bootstrap;
pub mod service;
pub mod telemetry;

pub use bootstrap::ensure_bootstrap_administrator;
pub use service::FleetgateService;
