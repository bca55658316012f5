use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use fleetgate_adapters::auth::jwt::JwtConfig;
use fleetgate_adapters::http::routes::{
    administrators::{
        create_administrator, get_administrator, list_administrators, update_administrator,
    },
    home::home,
    login::login,
    vehicles::{create_vehicle, delete_vehicle, get_vehicle, list_vehicles, update_vehicle},
};
use fleetgate_adapters::http::state::AppState;
use fleetgate_core::{AdministratorStore, VehicleStore};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// The assembled HTTP service: one router over a pair of stores.
///
/// Stores implement Clone via an internal pool or Arc, so a single pair is
/// shared by every route through the application state.
pub struct FleetgateService {
    router: Router,
}

impl FleetgateService {
    pub fn new<A, V>(administrators: A, vehicles: V, jwt: JwtConfig) -> Self
    where
        A: AdministratorStore + Clone + 'static,
        V: VehicleStore + Clone + 'static,
    {
        let state = AppState::new(administrators, vehicles, jwt);

        let router = Router::new()
            .route("/", get(home))
            .route("/login", post(login::<A, V>))
            .route(
                "/administrators",
                post(create_administrator::<A, V>).get(list_administrators::<A, V>),
            )
            .route(
                "/administrators/{id}",
                get(get_administrator::<A, V>).put(update_administrator::<A, V>),
            )
            .route(
                "/vehicles",
                post(create_vehicle::<A, V>).get(list_vehicles::<A, V>),
            )
            .route(
                "/vehicles/{id}",
                get(get_vehicle::<A, V>)
                    .put(update_vehicle::<A, V>)
                    .delete(delete_vehicle::<A, V>),
            )
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert into a plain router, e.g. for mounting under another service.
    pub fn into_router(self) -> Router {
        self.with_trace_layer().router
    }

    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        tracing::info!("Fleetgate listening on {}", listener.local_addr()?);

        axum::serve(listener, self.into_router()).await
    }
}
