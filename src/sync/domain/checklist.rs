//! Checklist reconciliation planning.
//!
//! The planner never renames or reorders checklist items; it only brings
//! completion state into agreement with task statuses, and only where the
//! two disagree, so already-synced items produce no remote writes.

use super::matching::MatcherPipeline;
use super::strip_status_glyph;
use crate::board::domain::{Checklist, ChecklistItem, ChecklistItemId};
use crate::plan::domain::PlannedTask;

/// A single completion-state write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUpdate {
    /// Item whose completion state disagrees with its matched task.
    pub item_id: ChecklistItemId,
    /// Completion state to write.
    pub completed: bool,
}

/// Outcome of matching a batch against existing checklist items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistReconciliation {
    /// Writes needed to bring item state into agreement, in task order.
    pub updates: Vec<ItemUpdate>,
    /// Task contents that matched no item; skipped, not fatal.
    pub unmatched: Vec<String>,
}

/// Plan for bringing a card's checklists into agreement with a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChecklistPlan {
    /// The card has no checklists yet; create one seeded with the given
    /// item names, one per task in batch order.
    Seed(Vec<String>),
    /// Update completion state on existing items.
    Reconcile(ChecklistReconciliation),
}

/// Computes the checklist plan for one sync.
///
/// A card with zero checklists and a non-empty batch is seeded with a
/// fresh checklist. Otherwise each task is matched against the items of
/// all checklists through the pipeline's tiers, and an update is recorded
/// only when the matched item's completion state disagrees with the
/// task's status.
#[must_use]
pub fn plan_checklist_sync(
    checklists: &[Checklist],
    tasks: &[PlannedTask],
    matchers: &MatcherPipeline,
) -> ChecklistPlan {
    if checklists.is_empty() && !tasks.is_empty() {
        let item_names = tasks
            .iter()
            .map(|task| strip_status_glyph(&task.content).trim_end().to_owned())
            .collect();
        return ChecklistPlan::Seed(item_names);
    }

    let items: Vec<&ChecklistItem> = checklists
        .iter()
        .flat_map(|checklist| checklist.items.iter())
        .collect();
    let mut reconciliation = ChecklistReconciliation::default();
    for task in tasks {
        let Some(found) = matchers.find(&task.content, &items) else {
            reconciliation.unmatched.push(task.content.clone());
            continue;
        };
        let desired = task.status.is_completed();
        if found.item.completed != desired {
            reconciliation.updates.push(ItemUpdate {
                item_id: found.item.id.clone(),
                completed: desired,
            });
        }
    }
    ChecklistPlan::Reconcile(reconciliation)
}
