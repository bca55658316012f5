pub mod login;
pub mod register_administrator;
pub mod update_administrator;
