//! Health endpoint server.
//!
//! # Responsibilities
//! - `GET /health`: liveness with per-dependency check results
//! - `GET /ready`: readiness
//! - Any other path: 404 with empty body
//!
//! The simulator has no real dependencies, so the checks always report
//! "ok"; the shape matches what a lab dashboard expects to scrape.

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: f64,
    pub checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    pub database: &'static str,
    pub cache: &'static str,
    pub external_api: &'static str,
}

#[derive(Serialize)]
pub struct ReadyStatus {
    pub status: &'static str,
    pub timestamp: f64,
}

fn epoch_seconds() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        timestamp: epoch_seconds(),
        checks: HealthChecks {
            database: "ok",
            cache: "ok",
            external_api: "ok",
        },
    })
}

async fn ready() -> Json<ReadyStatus> {
    Json(ReadyStatus {
        status: "ready",
        timestamp: epoch_seconds(),
    })
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Build the health router.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

/// Serve health checks on the given listener until shutdown fires.
pub async fn serve(
    listener: TcpListener,
    mut shutdown: broadcast::Receiver<()>,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!(address = %addr, "Health endpoint starting");

    axum::serve(listener, router())
        .with_graceful_shutdown(async move {
            let _ = shutdown.recv().await;
        })
        .await?;

    tracing::info!("Health endpoint stopped");
    Ok(())
}
