pub mod health;
pub mod loads;

use axum::Router;

use crate::state::AppState;

/// Build the `/snowflake` route tree.
///
/// ```text
/// POST /snowflake/copy-into           submit a load job
/// GET  /snowflake/monitor/{job_id}    poll job status
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/snowflake", loads::router())
}
