use axum::{routing::get, Json, Router};
use serde::Serialize;
use serde_json::json;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /health -- returns service health.
///
/// The mock holds no external resources (no database, no disk), so a
/// reachable process is a healthy process.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET / -- API information and endpoint map.
async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Mock Snowflake API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "submit_job": "POST /snowflake/copy-into",
            "monitor_job": "GET /snowflake/monitor/{job_id}"
        }
    }))
}

/// Mount root-level routes (NOT under `/snowflake`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
