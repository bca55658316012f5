//! Axum route handlers.
//!
//! Handlers extract request data, delegate to the use cases or stores, and
//! map results onto HTTP responses via [`error::ApiError`].

pub mod administrators;
pub mod error;
pub mod home;
pub mod login;
pub mod vehicles;

pub use error::ApiError;
