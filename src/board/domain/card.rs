//! Card, checklist, and label mirror types.

use super::{CardId, ChecklistId, ChecklistItemId, LabelId, ListId};
use serde::{Deserialize, Serialize};

/// Local mirror of a board card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Remote card identifier.
    pub id: CardId,
    /// Card title as displayed on the board.
    pub name: String,
    /// Markdown description body.
    pub description: String,
    /// Identifier of the list currently holding the card.
    pub list_id: ListId,
}

impl Card {
    /// Creates a card mirror from remote data.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        description: impl Into<String>,
        list_id: ListId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            list_id,
        }
    }
}

/// Fields for a card that does not exist remotely yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDraft {
    /// Title for the new card.
    pub name: String,
    /// Markdown description body for the new card.
    pub description: String,
    /// List the new card should be placed in.
    pub list_id: ListId,
}

impl CardDraft {
    /// Creates a draft targeting the given list.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, list_id: ListId) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            list_id,
        }
    }
}

/// Partial update applied to an existing card.
///
/// Only the populated fields are written; `None` fields leave the remote
/// value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPatch {
    /// Replacement title, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement description body, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CardPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the replacement description body.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns `true` when the patch would write nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// Local mirror of a checklist attached to a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    /// Remote checklist identifier.
    pub id: ChecklistId,
    /// Checklist name as displayed on the card.
    pub name: String,
    /// Items in board display order.
    pub items: Vec<ChecklistItem>,
}

impl Checklist {
    /// Creates a checklist mirror from remote data.
    #[must_use]
    pub fn new(id: ChecklistId, name: impl Into<String>, items: Vec<ChecklistItem>) -> Self {
        Self {
            id,
            name: name.into(),
            items,
        }
    }
}

/// Single entry in a checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Remote item identifier.
    pub id: ChecklistItemId,
    /// Item text as displayed on the card.
    pub name: String,
    /// Whether the item is ticked off.
    pub completed: bool,
}

impl ChecklistItem {
    /// Creates a checklist item mirror from remote data.
    #[must_use]
    pub fn new(id: ChecklistItemId, name: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            name: name.into(),
            completed,
        }
    }
}

/// Local mirror of a board label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Remote label identifier.
    pub id: LabelId,
    /// Label name as displayed on the board.
    pub name: String,
}

impl Label {
    /// Creates a label mirror from remote data.
    #[must_use]
    pub fn new(id: LabelId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
