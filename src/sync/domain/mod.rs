//! Pure reconciliation and matching logic.
//!
//! Everything in this module is side-effect free: functions take the
//! current remote state and the latest task batch, and return either new
//! text or a plan of updates for the service layer to apply.

mod checklist;
mod description;
mod line;
mod matching;
mod normalize;

pub use checklist::{ChecklistPlan, ChecklistReconciliation, ItemUpdate, plan_checklist_sync};
pub use description::{TASKS_HEADING, reconcile_description};
pub use line::{LineKind, StatusGlyph, classify_line, split_status_glyph, strip_status_glyph};
pub use matching::{
    ContainmentMatcher, ExactMatcher, ItemMatch, ItemMatcher, KeywordMatcher, MatcherPipeline,
};
pub use normalize::normalize;
