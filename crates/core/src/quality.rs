//! Data-quality rule evaluator — pure logic, no registry access.
//!
//! Runs once a job reaches its terminal phase. Rules are ordered and the
//! first violation wins: the not-null check over the whole payload, then
//! schema consistency against the first row. Order is part of the contract
//! (it determines which error is reported when both rules are violated).

use std::collections::BTreeSet;

use serde::Serialize;

use crate::types::Row;

/// Error code for a missing or null `id` field in any row.
pub const NOT_NULL_VIOLATION: &str = "NOT_NULL_VIOLATION";
/// Error code for rows whose field sets diverge from the first row's.
pub const SCHEMA_MISMATCH: &str = "SCHEMA_MISMATCH";

/// The primary-key column every row must carry.
const PK_COLUMN: &str = "id";

/// Stable (code, message) pair reported on a data-quality failure.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorDetails {
    pub error_code: &'static str,
    pub error_message: String,
}

/// Outcome of evaluating all rules over a row payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualityVerdict {
    /// All rules passed; carries the total row count.
    Pass { rows_loaded: u64 },
    /// A rule was violated.
    Fail(ErrorDetails),
}

/// Evaluate the ordered data-quality rules over the submitted rows.
pub fn evaluate_rows(rows: &[Row]) -> QualityVerdict {
    if let Some(details) = check_not_null_pk(rows) {
        return QualityVerdict::Fail(details);
    }
    if let Some(details) = check_schema_consistency(rows) {
        return QualityVerdict::Fail(details);
    }
    QualityVerdict::Pass {
        rows_loaded: rows.len() as u64,
    }
}

/// Rule 1: every row must have a present, non-null `id` field.
fn check_not_null_pk(rows: &[Row]) -> Option<ErrorDetails> {
    let violated = rows
        .iter()
        .any(|row| !matches!(row.get(PK_COLUMN), Some(v) if !v.is_null()));
    violated.then(|| ErrorDetails {
        error_code: NOT_NULL_VIOLATION,
        error_message: format!("Column '{PK_COLUMN}' is missing."),
    })
}

/// Rule 2: every row's field-name set must equal the first row's.
///
/// Reports the lowest-index mismatching row, with the sorted missing and
/// extra field names (each list only when non-empty).
fn check_schema_consistency(rows: &[Row]) -> Option<ErrorDetails> {
    let first = rows.first()?;
    let reference: BTreeSet<&str> = first.keys().map(String::as_str).collect();

    for (idx, row) in rows.iter().enumerate().skip(1) {
        let keys: BTreeSet<&str> = row.keys().map(String::as_str).collect();
        if keys == reference {
            continue;
        }

        // BTreeSet differences come out already sorted.
        let missing: Vec<&str> = reference.difference(&keys).copied().collect();
        let extra: Vec<&str> = keys.difference(&reference).copied().collect();

        let mut parts = Vec::new();
        if !missing.is_empty() {
            parts.push(format!("missing fields: [{}]", missing.join(", ")));
        }
        if !extra.is_empty() {
            parts.push(format!("extra fields: [{}]", extra.join(", ")));
        }

        return Some(ErrorDetails {
            error_code: SCHEMA_MISMATCH,
            error_message: format!(
                "Row at index {idx} has schema mismatch: {}",
                parts.join(", ")
            ),
        });
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
