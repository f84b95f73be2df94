//! Domain model for planner task batches.
//!
//! Tasks are immutable within a single sync call and have no identity across
//! batches beyond their `content` key; every batch is a full replacement of
//! the previous snapshot, never a delta.

mod error;
mod progress;
mod task;

pub use error::{ParseBatchError, ParseTaskStatusError, PlanDomainError};
pub use progress::ProgressSummary;
pub use task::{PlannedTask, TaskStatus, parse_batch};
