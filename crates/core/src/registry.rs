//! In-memory job registry.
//!
//! One record per submitted job, keyed by a freshly generated UUID. Records
//! are immutable once stored and live for the process lifetime (no eviction
//! -- this is a mock, not a production cache). The registry is owned by the
//! serving process and shared with handlers behind an `Arc`; it is NOT
//! ambient global state.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::command::LoadCommand;
use crate::types::{JobId, Timestamp};

/// A stored job: identifier, submission instant, and the original command.
#[derive(Debug, Clone)]
pub struct JobRecord {
    pub id: JobId,
    pub submitted_at: Timestamp,
    pub command: LoadCommand,
}

/// Shared registry of submitted jobs.
///
/// Writes are a single keyed insert under a short write lock; reads clone
/// the record out so no lock is held during status derivation.
#[derive(Debug, Default)]
pub struct JobRegistry {
    jobs: RwLock<HashMap<JobId, JobRecord>>,
}

impl JobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new job submitted at `Utc::now()` and return its identifier.
    ///
    /// Never fails: identifiers are generated internally (UUID v4) and do
    /// not collide, and the map has no capacity limit.
    pub fn submit(&self, command: LoadCommand) -> JobId {
        self.submit_at(command, Utc::now())
    }

    /// Store a new job with an explicit submission timestamp.
    ///
    /// `submit` delegates here; tests use it directly to backdate a job so
    /// that later phases can be observed without sleeping.
    pub fn submit_at(&self, command: LoadCommand, submitted_at: Timestamp) -> JobId {
        let id = Uuid::new_v4();
        let record = JobRecord {
            id,
            submitted_at,
            command,
        };
        self.jobs
            .write()
            .expect("job registry lock poisoned")
            .insert(id, record);
        id
    }

    /// Fetch a job by identifier.
    ///
    /// Absence is a normal outcome (the caller turns it into a not-found
    /// condition at the HTTP boundary), never an error.
    pub fn lookup(&self, id: JobId) -> Option<JobRecord> {
        self.jobs
            .read()
            .expect("job registry lock poisoned")
            .get(&id)
            .cloned()
    }

    /// Number of jobs currently stored.
    pub fn len(&self) -> usize {
        self.jobs.read().expect("job registry lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
