//! Gateway port for the remote board service.

use crate::board::domain::{
    Card, CardDraft, CardId, CardPatch, Checklist, ChecklistItemId, Label, LabelId, List, ListId,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board gateway operations.
pub type BoardGatewayResult<T> = Result<T, BoardGatewayError>;

/// Remote board access contract.
///
/// Every method maps to a single remote request. Implementations perform
/// no retries and no caching; callers own request ordering and pacing.
#[async_trait]
pub trait BoardGateway: Send + Sync {
    /// Fetches a card by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardGatewayError::NotFound`] when the card does not
    /// exist.
    async fn fetch_card(&self, id: &CardId) -> BoardGatewayResult<Card>;

    /// Creates a card from the given draft and returns the stored card.
    async fn create_card(&self, draft: CardDraft) -> BoardGatewayResult<Card>;

    /// Applies a partial update to a card and returns the stored card.
    ///
    /// # Errors
    ///
    /// Returns [`BoardGatewayError::NotFound`] when the card does not
    /// exist.
    async fn update_card(&self, id: &CardId, patch: CardPatch) -> BoardGatewayResult<Card>;

    /// Moves a card to another list and returns the stored card.
    ///
    /// # Errors
    ///
    /// Returns [`BoardGatewayError::NotFound`] when the card does not
    /// exist.
    async fn move_card(&self, id: &CardId, list_id: &ListId) -> BoardGatewayResult<Card>;

    /// Posts a comment on a card.
    ///
    /// # Errors
    ///
    /// Returns [`BoardGatewayError::NotFound`] when the card does not
    /// exist.
    async fn add_comment(&self, id: &CardId, text: &str) -> BoardGatewayResult<()>;

    /// Searches cards by free-text query against card names and
    /// descriptions.
    async fn search_cards(&self, query: &str) -> BoardGatewayResult<Vec<Card>>;

    /// Fetches all lists on the board in display order.
    async fn fetch_lists(&self) -> BoardGatewayResult<Vec<List>>;

    /// Fetches the checklists attached to a card.
    ///
    /// # Errors
    ///
    /// Returns [`BoardGatewayError::NotFound`] when the card does not
    /// exist.
    async fn fetch_checklists(&self, card_id: &CardId) -> BoardGatewayResult<Vec<Checklist>>;

    /// Creates a checklist on a card with the given items, all unticked.
    ///
    /// # Errors
    ///
    /// Returns [`BoardGatewayError::NotFound`] when the card does not
    /// exist.
    async fn create_checklist(
        &self,
        card_id: &CardId,
        name: &str,
        item_names: &[String],
    ) -> BoardGatewayResult<Checklist>;

    /// Ticks or unticks a single checklist item.
    ///
    /// # Errors
    ///
    /// Returns [`BoardGatewayError::NotFound`] when the card or item does
    /// not exist.
    async fn set_item_completion(
        &self,
        card_id: &CardId,
        item_id: &ChecklistItemId,
        completed: bool,
    ) -> BoardGatewayResult<()>;

    /// Fetches all labels defined on the board.
    async fn fetch_labels(&self) -> BoardGatewayResult<Vec<Label>>;

    /// Attaches an existing board label to a card.
    ///
    /// # Errors
    ///
    /// Returns [`BoardGatewayError::NotFound`] when the card or label does
    /// not exist.
    async fn add_label(&self, card_id: &CardId, label_id: &LabelId) -> BoardGatewayResult<()>;
}

/// Errors returned by board gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardGatewayError {
    /// The addressed remote entity does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Entity kind, e.g. `"card"` or `"list"`.
        kind: &'static str,
        /// Identifier that failed to resolve.
        id: String,
    },

    /// Transport-layer failure reaching the remote service.
    #[error("board transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardGatewayError {
    /// Creates a not-found error for the given entity kind and identifier.
    #[must_use]
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Returns `true` for the not-found variant.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
