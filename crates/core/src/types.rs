/// Jobs are identified by UUID v4, generated at submission.
pub type JobId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A single submitted row: field name to arbitrary JSON value.
pub type Row = serde_json::Map<String, serde_json::Value>;
