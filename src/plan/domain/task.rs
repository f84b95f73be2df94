//! Planner task entries and their lifecycle statuses.

use super::{ParseBatchError, ParseTaskStatusError, PlanDomainError};
use crate::board::domain::ListRole;
use serde::{Deserialize, Serialize};

/// Lifecycle status reported by the planner for a single task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started.
    Pending,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Maps this status to the board lane a card in this state belongs to.
    ///
    /// The mapping is pure and total: `pending` targets the to-do lane,
    /// `in_progress` the in-progress lane, and `completed` the done lane.
    /// Whether the board actually has a list bound to the returned role is
    /// the caller's concern (see
    /// [`ListDirectory::require`](crate::board::domain::ListDirectory::require)).
    #[must_use]
    pub const fn target_role(self) -> ListRole {
        match self {
            Self::Pending => ListRole::Todo,
            Self::InProgress => ListRole::InProgress,
            Self::Completed => ListRole::Done,
        }
    }

    /// Returns `true` when the status counts toward completed progress.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// A single unit of work reported by the planner.
///
/// `content` is the task's only identity: items on the board are matched
/// against it by name, and batches replace one another wholesale, so a batch
/// should carry at most one task per content key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedTask {
    /// Unique content key within the batch.
    pub content: String,

    /// Lifecycle status for this batch.
    pub status: TaskStatus,

    /// Human-readable gerund label shown while the task is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_form: Option<String>,
}

impl PlannedTask {
    /// Creates a task entry with the given content and status.
    ///
    /// # Errors
    ///
    /// Returns [`PlanDomainError::EmptyTaskContent`] when the content is
    /// empty after trimming.
    pub fn new(content: impl Into<String>, status: TaskStatus) -> Result<Self, PlanDomainError> {
        let text = content.into();
        if text.trim().is_empty() {
            return Err(PlanDomainError::EmptyTaskContent);
        }
        Ok(Self {
            content: text,
            status,
            active_form: None,
        })
    }

    /// Sets the gerund label.
    #[must_use]
    pub fn with_active_form(mut self, active_form: impl Into<String>) -> Self {
        self.active_form = Some(active_form.into());
        self
    }
}

/// Decodes a task batch from the planner's JSON payload.
///
/// The payload is a JSON array of objects with `content`, `status`, and
/// `activeForm` fields.
///
/// # Errors
///
/// Returns [`ParseBatchError`] when the payload is not a well-formed batch.
pub fn parse_batch(payload: &str) -> Result<Vec<PlannedTask>, ParseBatchError> {
    Ok(serde_json::from_str(payload)?)
}
