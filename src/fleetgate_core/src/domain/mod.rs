pub mod administrator;
pub mod email;
pub mod error;
pub mod role;
pub mod secret;
pub mod validation;
pub mod vehicle;
