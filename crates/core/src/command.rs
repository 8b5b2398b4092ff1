//! Load command types — the input half of the job contract.

use serde::{Deserialize, Serialize};

use crate::types::Row;

/// How submitted rows would be applied to the target table.
///
/// The mock never writes anywhere, so the mode does not affect the outcome;
/// it is accepted and stored for fidelity with the real service's contract.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoadMode {
    Append,
    Overwrite,
}

/// A validated load request as stored alongside the job record.
///
/// Invariant: `rows` is non-empty. The API layer enforces this before the
/// command reaches the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCommand {
    pub table_name: String,
    pub load_mode: LoadMode,
    pub rows: Vec<Row>,
}
