use color_eyre::eyre::Result;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use fleetgate_adapters::config::Settings;
use fleetgate_adapters::persistence::{
    InMemoryAdministratorStore, InMemoryVehicleStore, PostgresAdministratorStore,
    PostgresVehicleStore,
};
use fleetgate_service::{FleetgateService, ensure_bootstrap_administrator};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load()?;
    let jwt = settings.jwt_config();

    let listener = tokio::net::TcpListener::bind(&settings.app.address).await?;

    if settings.database.url.expose_secret().is_empty() {
        tracing::warn!("no database configured, falling back to in-memory stores");

        let administrators = InMemoryAdministratorStore::new();
        let vehicles = InMemoryVehicleStore::new();
        ensure_bootstrap_administrator(&administrators, &settings.bootstrap).await?;

        FleetgateService::new(administrators, vehicles, jwt)
            .run(listener)
            .await?;
    } else {
        let pool = PgPoolOptions::new()
            .max_connections(settings.database.max_connections)
            .connect(settings.database.url.expose_secret())
            .await?;

        sqlx::migrate!().run(&pool).await?;

        let administrators = PostgresAdministratorStore::new(pool.clone());
        let vehicles = PostgresVehicleStore::new(pool);
        ensure_bootstrap_administrator(&administrators, &settings.bootstrap).await?;

        FleetgateService::new(administrators, vehicles, jwt)
            .run(listener)
            .await?;
    }

    Ok(())
}

fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
