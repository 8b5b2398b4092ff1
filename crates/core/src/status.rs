//! Status derivation — the wall-clock-driven phase state machine.
//!
//! A job has no stored phase. Every query recomputes the phase from
//! `now - submitted_at`, which keeps concurrent queries trivially consistent
//! and removes any need for timers or background workers. Once the terminal
//! window is reached the data-quality rules decide SUCCESS vs FAILED.

use serde::Serialize;

use crate::quality::{evaluate_rows, ErrorDetails, QualityVerdict};
use crate::registry::JobRecord;
use crate::types::{JobId, Timestamp};

/// Seconds after submission a job stays QUEUED.
pub const QUEUED_UNTIL_SECS: f64 = 2.0;
/// Seconds after submission a job stays RESUMING_WAREHOUSE.
pub const RESUMING_UNTIL_SECS: f64 = 5.0;
/// Seconds after submission a job stays EXECUTING; terminal afterwards.
pub const EXECUTING_UNTIL_SECS: f64 = 8.0;

/// Externally visible job phase.
///
/// Ordering follows the lifecycle: transient phases first, then the two
/// terminal phases. `derive_status` never regresses along this order for a
/// non-decreasing time sequence.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobPhase {
    Queued,
    ResumingWarehouse,
    Executing,
    Success,
    Failed,
}

impl JobPhase {
    /// Whether this phase admits no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobPhase::Success | JobPhase::Failed)
    }
}

/// Derived view of a job at one instant. Never stored.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JobStatus {
    pub job_id: JobId,
    pub status: JobPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows_loaded: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<ErrorDetails>,
    pub message: String,
}

impl JobStatus {
    fn transient(job_id: JobId, status: JobPhase, message: &str) -> Self {
        Self {
            job_id,
            status,
            rows_loaded: None,
            error_details: None,
            message: message.to_string(),
        }
    }
}

/// Compute the status of `record` as observed at `now`.
///
/// Pure and total: never fails, never mutates the record. Two calls with the
/// same arguments return identical values.
pub fn derive_status(record: &JobRecord, now: Timestamp) -> JobStatus {
    // Negative elapsed (caller clock behind the registry clock) clamps to
    // the first phase.
    let elapsed = (now - record.submitted_at)
        .as_seconds_f64()
        .max(0.0);

    if elapsed < QUEUED_UNTIL_SECS {
        return JobStatus::transient(record.id, JobPhase::Queued, "Job submitted successfully");
    }
    if elapsed < RESUMING_UNTIL_SECS {
        return JobStatus::transient(
            record.id,
            JobPhase::ResumingWarehouse,
            "Waking up warehouse",
        );
    }
    if elapsed < EXECUTING_UNTIL_SECS {
        return JobStatus::transient(record.id, JobPhase::Executing, "Running query");
    }

    match evaluate_rows(&record.command.rows) {
        QualityVerdict::Pass { rows_loaded } => JobStatus {
            job_id: record.id,
            status: JobPhase::Success,
            rows_loaded: Some(rows_loaded),
            error_details: None,
            message: "Load success".to_string(),
        },
        QualityVerdict::Fail(details) => JobStatus {
            job_id: record.id,
            status: JobPhase::Failed,
            rows_loaded: None,
            error_details: Some(details),
            message: "Data Quality Failure".to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
