use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Home {
    pub message: String,
    pub documentation: String,
}

/// Anonymous service banner.
pub async fn home() -> Json<Home> {
    Json(Home {
        message: "Welcome to the Fleetgate vehicle manager API".to_string(),
        documentation: "https://github.com/fleetgate/fleetgate".to_string(),
    })
}
