pub mod env {
    pub const ENV_PREFIX: &str = "FLEETGATE";
    pub const ENV_SEPARATOR: &str = "__";
}

pub mod defaults {
    /// Token lifetime: 24 hours, no refresh mechanism.
    pub const TOKEN_TTL_SECONDS: i64 = 86_400;
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const MAX_DB_CONNECTIONS: u32 = 5;
}

pub mod limits {
    use std::time::Duration;

    /// Caller-imposed deadline around a login attempt.
    pub const LOGIN_TIMEOUT: Duration = Duration::from_secs(10);
}
