use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

use crate::diagnostics;
use crate::errors::Error;
use crate::metrics;
use crate::model::{DiagnosticsSnapshot, StatusSummary, Vehicle};
use crate::registry::Registry;

#[derive(Debug, Clone)]
struct AppState {
    registry: Arc<Registry>,
}

/// Builds the API router. `cors_origins` is either `*` (permissive) or a
/// comma-separated origin allow-list.
pub fn create_router(registry: Arc<Registry>, cors_origins: &str) -> Router {
    let state = AppState { registry };

    Router::new()
        .route("/api", get(root))
        .route("/api/vehicles", get(list_vehicles))
        .route("/api/vehicles/:id", get(get_vehicle))
        .route("/api/diagnostics/:id", get(get_diagnostics))
        .route("/api/status/:id", get(get_status))
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

fn cors_layer(origins: &str) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.trim() == "*" {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();
    cors.allow_origin(AllowOrigin::list(allowed))
}

async fn root() -> Json<serde_json::Value> {
    metrics::REQUESTS_TOTAL.inc();
    Json(json!({
        "message": "Vehicle Diagnostics API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn list_vehicles(State(state): State<AppState>) -> Json<Vec<Vehicle>> {
    metrics::REQUESTS_TOTAL.inc();
    Json(state.registry.list().to_vec())
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vehicle>, Error> {
    metrics::REQUESTS_TOTAL.inc();
    let vehicle = state.registry.get(&id)?;
    Ok(Json(vehicle.clone()))
}

async fn get_diagnostics(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DiagnosticsSnapshot>, Error> {
    metrics::REQUESTS_TOTAL.inc();
    state.registry.get(&id)?;

    let snapshot = diagnostics::generate(&mut rand::thread_rng(), &id);
    metrics::SNAPSHOTS_GENERATED_TOTAL.inc();
    Ok(Json(snapshot))
}

async fn get_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatusSummary>, Error> {
    metrics::REQUESTS_TOTAL.inc();
    state.registry.get(&id)?;

    let snapshot = diagnostics::generate(&mut rand::thread_rng(), &id);
    metrics::SNAPSHOTS_GENERATED_TOTAL.inc();
    Ok(Json(diagnostics::derive_status(&snapshot)))
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::VehicleNotFound(_) => {
                metrics::NOT_FOUND_TOTAL.inc();
                warn!("{}", self);
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "detail": self.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
