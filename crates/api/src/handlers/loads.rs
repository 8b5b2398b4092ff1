//! Handlers for the mock load endpoints.
//!
//! Submission is fire-and-forget: the registry entry is created and the job
//! id returned immediately. Monitoring derives a fresh status on every call;
//! nothing about a job is cached between requests.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use snowmock_core::command::{LoadCommand, LoadMode};
use snowmock_core::status::{derive_status, JobPhase, JobStatus};
use snowmock_core::types::Row;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /snowflake/copy-into`.
///
/// Shape validation happens here, before the command reaches the core: the
/// core assumes a non-empty row sequence.
#[derive(Debug, Deserialize, Validate)]
pub struct LoadRequest {
    #[validate(length(min = 1, message = "table_name must not be empty"))]
    pub table_name: String,
    pub load_mode: LoadMode,
    #[validate(length(min = 1, message = "rows must contain at least one row"))]
    pub rows: Vec<Row>,
}

/// Response body acknowledging a submission.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub job_id: Uuid,
    pub status: JobPhase,
    pub message: &'static str,
}

/// POST /snowflake/copy-into
///
/// Validate the load request, register the job, and return 202 with the
/// fresh job id. Submission never blocks on the simulated work.
pub async fn trigger_load(
    State(state): State<AppState>,
    Json(input): Json<LoadRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let row_count = input.rows.len();
    let command = LoadCommand {
        table_name: input.table_name,
        load_mode: input.load_mode,
        rows: input.rows,
    };

    let job_id = state.registry.submit(command);

    tracing::info!(%job_id, rows = row_count, "Load job submitted");

    Ok((
        StatusCode::ACCEPTED,
        Json(SubmissionResponse {
            job_id,
            status: JobPhase::Queued,
            message: "Job submitted successfully",
        }),
    ))
}

/// GET /snowflake/monitor/{job_id}
///
/// Look up the job and derive its status at the current instant. A path
/// segment that is not a UUID can never name a stored job, so it gets the
/// same 404 as a well-formed unknown id.
pub async fn monitor_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> AppResult<Json<JobStatus>> {
    let not_found = || AppError::NotFound {
        entity: "Job",
        id: job_id.clone(),
    };

    let id = Uuid::parse_str(&job_id).map_err(|_| not_found())?;
    let record = state.registry.lookup(id).ok_or_else(not_found)?;

    let status = derive_status(&record, Utc::now());

    tracing::debug!(%job_id, status = ?status.status, "Job status derived");

    Ok(Json(status))
}
