//! Process configuration.
//!
//! Every setting has a default and can be overridden from the environment
//! (`FLEETGATE__SECTION__KEY`, e.g. `FLEETGATE__AUTH__JWT_SECRET`). A `.env`
//! file is honoured when present.

use config::{Config, ConfigError, Environment};
use secrecy::Secret;
use serde::Deserialize;

use crate::auth::jwt::JwtConfig;
use crate::config::constants::{defaults, env};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    pub bootstrap: BootstrapSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// Symmetric signing key for issued tokens. An empty key means token
    /// issuance fails explicitly rather than handing out unsigned tokens.
    pub jwt_secret: Secret<String>,
    pub token_ttl_seconds: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapSettings {
    /// Seed administrator created at startup when the store is empty.
    /// Seeding is skipped when any of these is blank.
    pub admin_email: String,
    pub admin_secret: Secret<String>,
    pub admin_duress_secret: Secret<String>,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Config::builder()
            .set_default("app.address", defaults::APP_ADDRESS)?
            .set_default("database.url", "")?
            .set_default("database.max_connections", defaults::MAX_DB_CONNECTIONS)?
            .set_default("auth.jwt_secret", "")?
            .set_default("auth.token_ttl_seconds", defaults::TOKEN_TTL_SECONDS)?
            .set_default("bootstrap.admin_email", "")?
            .set_default("bootstrap.admin_secret", "")?
            .set_default("bootstrap.admin_duress_secret", "")?
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator(env::ENV_SEPARATOR)
                    .separator(env::ENV_SEPARATOR),
            )
            .build()?
            .try_deserialize()
    }

    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig {
            jwt_secret: self.auth.jwt_secret.clone(),
            token_ttl_in_seconds: self.auth.token_ttl_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn defaults_load_without_environment() {
        let settings = Settings::load().unwrap();
        assert_eq!(settings.app.address, defaults::APP_ADDRESS);
        assert_eq!(settings.auth.token_ttl_seconds, defaults::TOKEN_TTL_SECONDS);
        assert!(settings.database.url.expose_secret().is_empty());
    }
}
