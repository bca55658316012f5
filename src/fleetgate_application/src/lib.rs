pub mod use_cases;

pub use use_cases::{
    login::{LoginError, LoginUseCase, SecretMatch, resolve_secret},
    register_administrator::{RegisterAdministratorError, RegisterAdministratorUseCase},
    update_administrator::{UpdateAdministratorError, UpdateAdministratorUseCase},
};
