//! Tiered name matching between tasks and checklist items.
//!
//! Checklist items are matched by name, never by identifier, because the
//! remote id space is opaque to the planner. Matching runs as an ordered
//! pipeline of strategies; the first strategy to accept an item wins and
//! later tiers are not consulted.

use super::normalize;
use crate::board::domain::ChecklistItem;

/// Shortest token length considered significant for keyword matching.
const KEYWORD_MIN_LENGTH: usize = 4;

/// One matching strategy tier.
///
/// Implementations receive task content already passed through
/// [`normalize`] and are responsible for normalizing candidate item names
/// themselves.
pub trait ItemMatcher: Send + Sync {
    /// Strategy name used in log events.
    fn name(&self) -> &'static str;

    /// Returns the first item this strategy accepts for the task content.
    fn find<'a>(
        &self,
        normalized_content: &str,
        items: &[&'a ChecklistItem],
    ) -> Option<&'a ChecklistItem>;
}

/// Accepts an item whose normalized name equals the task content.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl ItemMatcher for ExactMatcher {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn find<'a>(
        &self,
        normalized_content: &str,
        items: &[&'a ChecklistItem],
    ) -> Option<&'a ChecklistItem> {
        items
            .iter()
            .find(|item| normalize(&item.name) == normalized_content)
            .copied()
    }
}

/// Accepts an item whose normalized name contains the task content as a
/// substring, or vice versa.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainmentMatcher;

impl ItemMatcher for ContainmentMatcher {
    fn name(&self) -> &'static str {
        "containment"
    }

    fn find<'a>(
        &self,
        normalized_content: &str,
        items: &[&'a ChecklistItem],
    ) -> Option<&'a ChecklistItem> {
        items
            .iter()
            .find(|item| {
                let item_name = normalize(&item.name);
                !item_name.is_empty()
                    && (item_name.contains(normalized_content)
                        || normalized_content.contains(&item_name))
            })
            .copied()
    }
}

/// Accepts an item whose normalized name contains any significant token
/// of the task content.
///
/// Tokens come from splitting the normalized content on whitespace; only
/// tokens longer than three characters count, so articles and short verbs
/// do not produce accidental matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordMatcher;

impl ItemMatcher for KeywordMatcher {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn find<'a>(
        &self,
        normalized_content: &str,
        items: &[&'a ChecklistItem],
    ) -> Option<&'a ChecklistItem> {
        let tokens: Vec<&str> = normalized_content
            .split_whitespace()
            .filter(|token| token.len() >= KEYWORD_MIN_LENGTH)
            .collect();
        if tokens.is_empty() {
            return None;
        }
        items
            .iter()
            .find(|item| {
                let item_name = normalize(&item.name);
                tokens.iter().any(|token| item_name.contains(token))
            })
            .copied()
    }
}

/// A successful match, carrying the winning strategy for log context.
#[derive(Debug, Clone, Copy)]
pub struct ItemMatch<'a> {
    /// The matched checklist item.
    pub item: &'a ChecklistItem,
    /// Name of the strategy tier that accepted the item.
    pub strategy: &'static str,
}

/// Ordered pipeline of matching strategies.
pub struct MatcherPipeline {
    tiers: Vec<Box<dyn ItemMatcher>>,
}

impl MatcherPipeline {
    /// Creates a pipeline from an explicit tier ordering.
    #[must_use]
    pub fn new(tiers: Vec<Box<dyn ItemMatcher>>) -> Self {
        Self { tiers }
    }

    /// Finds the item matching the given raw task content, trying each
    /// tier in order.
    ///
    /// Content that normalizes to the empty string never matches.
    #[must_use]
    pub fn find<'a>(
        &self,
        task_content: &str,
        items: &[&'a ChecklistItem],
    ) -> Option<ItemMatch<'a>> {
        let needle = normalize(task_content);
        if needle.is_empty() {
            return None;
        }
        self.tiers.iter().find_map(|tier| {
            tier.find(&needle, items).map(|item| ItemMatch {
                item,
                strategy: tier.name(),
            })
        })
    }
}

impl Default for MatcherPipeline {
    /// The standard tier ordering: exact, then containment, then keyword.
    fn default() -> Self {
        Self::new(vec![
            Box::new(ExactMatcher),
            Box::new(ContainmentMatcher),
            Box::new(KeywordMatcher),
        ])
    }
}

impl std::fmt::Debug for MatcherPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.tiers.iter().map(|tier| tier.name()).collect();
        f.debug_struct("MatcherPipeline")
            .field("tiers", &names)
            .finish()
    }
}
