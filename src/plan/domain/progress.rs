//! Batch progress accounting.

use super::{PlannedTask, TaskStatus};
use std::fmt;

/// Progress counts for one task batch.
///
/// The display form is the exact text posted as a progress comment:
/// `"<completed>/<total> completed (<in progress> in progress)"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressSummary {
    completed: usize,
    in_progress: usize,
    total: usize,
}

impl ProgressSummary {
    /// Tallies the statuses of a task batch.
    #[must_use]
    pub fn of(tasks: &[PlannedTask]) -> Self {
        let mut summary = Self {
            completed: 0,
            in_progress: 0,
            total: tasks.len(),
        };
        for task in tasks {
            match task.status {
                TaskStatus::Completed => summary.completed += 1,
                TaskStatus::InProgress => summary.in_progress += 1,
                TaskStatus::Pending => {}
            }
        }
        summary
    }

    /// Returns the number of completed tasks.
    #[must_use]
    pub const fn completed(self) -> usize {
        self.completed
    }

    /// Returns the number of in-progress tasks.
    #[must_use]
    pub const fn in_progress(self) -> usize {
        self.in_progress
    }

    /// Returns the batch size.
    #[must_use]
    pub const fn total(self) -> usize {
        self.total
    }

    /// Returns `true` when the batch is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.total == 0
    }

    /// Returns `true` when every task in a non-empty batch is completed.
    #[must_use]
    pub const fn is_all_completed(self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

impl fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} completed ({} in progress)",
            self.completed, self.total, self.in_progress
        )
    }
}
