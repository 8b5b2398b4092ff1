//! Route definitions for the `/snowflake` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::loads;
use crate::state::AppState;

/// Routes mounted at `/snowflake`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/copy-into", post(loads::trigger_load))
        .route("/monitor/{job_id}", get(loads::monitor_job))
}
