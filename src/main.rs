use std::env;
use std::sync::Arc;

use axum::{routing::get, Router};
use tracing::{error, info};

use vehicle_diagnostics::{metrics, registry::Registry, rest};

#[tokio::main]
async fn main() {
    let http_addr = env::var("HTTP_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let cors_origins = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());

    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Starting Vehicle Diagnostics API");
    info!("HTTP server: {}", http_addr);
    info!("CORS origins: {}", cors_origins);

    // Initialize metrics
    metrics::init_metrics();

    // Seed the vehicle catalog; immutable for the process lifetime
    let registry = Arc::new(Registry::new());
    info!("Vehicle registry seeded with {} vehicles", registry.list().len());

    // Build HTTP app with REST API and metrics endpoint
    let app = Router::new()
        .route("/metrics", get(metrics_handler))
        .merge(rest::create_router(registry, &cors_origins));

    // Start HTTP server
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to bind to {}: {}", http_addr, e);
            std::process::exit(1);
        });

    info!("HTTP server listening on {}", http_addr);

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap_or_else(|e| {
            error!("HTTP server error: {}", e);
        });
    });

    tokio::select! {
        _ = server_handle => {
            error!("HTTP server terminated");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
    }

    info!("Shutting down");
}

async fn metrics_handler() -> String {
    metrics::gather_metrics()
}
