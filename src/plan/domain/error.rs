//! Error types for planner batch validation and parsing.

use thiserror::Error;

/// Errors returned while constructing planner domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlanDomainError {
    /// The task content is empty after trimming.
    #[error("task content must not be empty")]
    EmptyTaskContent,
}

/// Error returned while parsing task statuses reported by the planner.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while decoding a task batch from the planner's JSON
/// payload.
#[derive(Debug, Error)]
#[error("invalid task batch: {0}")]
pub struct ParseBatchError(#[from] pub serde_json::Error);
