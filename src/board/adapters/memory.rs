//! In-memory board gateway for tests and local development.
//!
//! Besides implementing the gateway contract, the adapter records every
//! operation it serves and supports injecting transport failures per
//! operation, so suites can assert both what was sent to the "remote"
//! board and how callers behave when a request fails.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use crate::board::{
    domain::{
        Card, CardDraft, CardId, CardPatch, Checklist, ChecklistId, ChecklistItem,
        ChecklistItemId, Label, LabelId, List, ListId,
    },
    ports::{BoardGateway, BoardGatewayError, BoardGatewayResult},
};

/// Thread-safe in-memory board gateway.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardGateway {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    lists: Vec<List>,
    cards: Vec<Card>,
    checklists: HashMap<CardId, Vec<Checklist>>,
    comments: HashMap<CardId, Vec<String>>,
    labels: Vec<Label>,
    card_labels: HashMap<CardId, Vec<LabelId>>,
    operations: Vec<String>,
    failing: HashSet<String>,
    next_id: u64,
}

impl InMemoryBoardState {
    fn mint(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    fn card(&self, id: &CardId) -> BoardGatewayResult<&Card> {
        self.cards
            .iter()
            .find(|card| &card.id == id)
            .ok_or_else(|| BoardGatewayError::not_found("card", id.as_str()))
    }

    fn card_mut(&mut self, id: &CardId) -> BoardGatewayResult<&mut Card> {
        self.cards
            .iter_mut()
            .find(|card| &card.id == id)
            .ok_or_else(|| BoardGatewayError::not_found("card", id.as_str()))
    }
}

impl InMemoryBoardGateway {
    /// Creates an empty in-memory board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks state for a gateway operation, recording it in the operation
    /// log and honouring injected failures.
    fn begin(
        &self,
        operation: &'static str,
    ) -> BoardGatewayResult<RwLockWriteGuard<'_, InMemoryBoardState>> {
        let mut state = self
            .state
            .write()
            .map_err(|err| BoardGatewayError::transport(std::io::Error::other(err.to_string())))?;
        state.operations.push(operation.to_owned());
        if state.failing.contains(operation) {
            return Err(BoardGatewayError::transport(std::io::Error::other(
                format!("injected {operation} failure"),
            )));
        }
        Ok(state)
    }

    /// Locks state for seeding and inspection, recovering from poisoning.
    fn peek(&self) -> RwLockWriteGuard<'_, InMemoryBoardState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds a list to the board and returns its identifier.
    pub fn seed_list(&self, name: impl Into<String>) -> ListId {
        let mut state = self.peek();
        let id = ListId::new(state.mint("list"));
        state.lists.push(List::new(id.clone(), name));
        id
    }

    /// Adds a card to a list and returns its identifier.
    pub fn seed_card(
        &self,
        list_id: &ListId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> CardId {
        let mut state = self.peek();
        let id = CardId::new(state.mint("card"));
        state
            .cards
            .push(Card::new(id.clone(), name, description, list_id.clone()));
        id
    }

    /// Attaches a checklist to a card and returns its identifier.
    ///
    /// Items are given as `(name, completed)` pairs.
    pub fn seed_checklist(
        &self,
        card_id: &CardId,
        name: impl Into<String>,
        items: &[(&str, bool)],
    ) -> ChecklistId {
        let mut state = self.peek();
        let id = ChecklistId::new(state.mint("checklist"));
        let entries = items
            .iter()
            .map(|(item_name, completed)| {
                let item_id = ChecklistItemId::new(state.mint("item"));
                ChecklistItem::new(item_id, *item_name, *completed)
            })
            .collect();
        state
            .checklists
            .entry(card_id.clone())
            .or_default()
            .push(Checklist::new(id.clone(), name, entries));
        id
    }

    /// Defines a board label and returns its identifier.
    pub fn seed_label(&self, name: impl Into<String>) -> LabelId {
        let mut state = self.peek();
        let id = LabelId::new(state.mint("label"));
        state.labels.push(Label::new(id.clone(), name));
        id
    }

    /// Makes every future call to the named operation fail with a
    /// transport error.
    pub fn fail_operation(&self, operation: impl Into<String>) {
        self.peek().failing.insert(operation.into());
    }

    /// Removes all injected failures.
    pub fn clear_failures(&self) {
        self.peek().failing.clear();
    }

    /// Returns the names of all operations served so far, in call order.
    #[must_use]
    pub fn operations(&self) -> Vec<String> {
        self.peek().operations.clone()
    }

    /// Empties the operation log.
    pub fn clear_operations(&self) {
        self.peek().operations.clear();
    }

    /// Returns the current stored card, if present.
    #[must_use]
    pub fn card_snapshot(&self, id: &CardId) -> Option<Card> {
        let state = self.peek();
        state.cards.iter().find(|card| &card.id == id).cloned()
    }

    /// Returns the current checklists attached to a card.
    #[must_use]
    pub fn checklists_snapshot(&self, card_id: &CardId) -> Vec<Checklist> {
        self.peek().checklists.get(card_id).cloned().unwrap_or_default()
    }

    /// Returns the comments posted on a card, oldest first.
    #[must_use]
    pub fn comments_snapshot(&self, card_id: &CardId) -> Vec<String> {
        self.peek().comments.get(card_id).cloned().unwrap_or_default()
    }

    /// Returns the labels attached to a card.
    #[must_use]
    pub fn card_label_ids(&self, card_id: &CardId) -> Vec<LabelId> {
        self.peek().card_labels.get(card_id).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl BoardGateway for InMemoryBoardGateway {
    async fn fetch_card(&self, id: &CardId) -> BoardGatewayResult<Card> {
        let state = self.begin("fetch_card")?;
        state.card(id).cloned()
    }

    async fn create_card(&self, draft: CardDraft) -> BoardGatewayResult<Card> {
        let mut state = self.begin("create_card")?;
        let id = CardId::new(state.mint("card"));
        let card = Card::new(id, draft.name, draft.description, draft.list_id);
        state.cards.push(card.clone());
        Ok(card)
    }

    async fn update_card(&self, id: &CardId, patch: CardPatch) -> BoardGatewayResult<Card> {
        let mut state = self.begin("update_card")?;
        let card = state.card_mut(id)?;
        if let Some(name) = patch.name {
            card.name = name;
        }
        if let Some(description) = patch.description {
            card.description = description;
        }
        Ok(card.clone())
    }

    async fn move_card(&self, id: &CardId, list_id: &ListId) -> BoardGatewayResult<Card> {
        let mut state = self.begin("move_card")?;
        let card = state.card_mut(id)?;
        card.list_id = list_id.clone();
        Ok(card.clone())
    }

    async fn add_comment(&self, id: &CardId, text: &str) -> BoardGatewayResult<()> {
        let mut state = self.begin("add_comment")?;
        state.card(id)?;
        state
            .comments
            .entry(id.clone())
            .or_default()
            .push(text.to_owned());
        Ok(())
    }

    async fn search_cards(&self, query: &str) -> BoardGatewayResult<Vec<Card>> {
        let state = self.begin("search_cards")?;
        let needle = query.to_lowercase();
        Ok(state
            .cards
            .iter()
            .filter(|card| {
                card.name.to_lowercase().contains(&needle)
                    || card.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    async fn fetch_lists(&self) -> BoardGatewayResult<Vec<List>> {
        let state = self.begin("fetch_lists")?;
        Ok(state.lists.clone())
    }

    async fn fetch_checklists(&self, card_id: &CardId) -> BoardGatewayResult<Vec<Checklist>> {
        let state = self.begin("fetch_checklists")?;
        state.card(card_id)?;
        Ok(state.checklists.get(card_id).cloned().unwrap_or_default())
    }

    async fn create_checklist(
        &self,
        card_id: &CardId,
        name: &str,
        item_names: &[String],
    ) -> BoardGatewayResult<Checklist> {
        let mut state = self.begin("create_checklist")?;
        state.card(card_id)?;
        let id = ChecklistId::new(state.mint("checklist"));
        let items = item_names
            .iter()
            .map(|item_name| {
                let item_id = ChecklistItemId::new(state.mint("item"));
                ChecklistItem::new(item_id, item_name.clone(), false)
            })
            .collect();
        let checklist = Checklist::new(id, name, items);
        state
            .checklists
            .entry(card_id.clone())
            .or_default()
            .push(checklist.clone());
        Ok(checklist)
    }

    async fn set_item_completion(
        &self,
        card_id: &CardId,
        item_id: &ChecklistItemId,
        completed: bool,
    ) -> BoardGatewayResult<()> {
        let mut state = self.begin("set_item_completion")?;
        let item = state
            .checklists
            .get_mut(card_id)
            .into_iter()
            .flatten()
            .flat_map(|checklist| checklist.items.iter_mut())
            .find(|item| &item.id == item_id)
            .ok_or_else(|| BoardGatewayError::not_found("checklist item", item_id.as_str()))?;
        item.completed = completed;
        Ok(())
    }

    async fn fetch_labels(&self) -> BoardGatewayResult<Vec<Label>> {
        let state = self.begin("fetch_labels")?;
        Ok(state.labels.clone())
    }

    async fn add_label(&self, card_id: &CardId, label_id: &LabelId) -> BoardGatewayResult<()> {
        let mut state = self.begin("add_label")?;
        state.card(card_id)?;
        if !state.labels.iter().any(|label| &label.id == label_id) {
            return Err(BoardGatewayError::not_found("label", label_id.as_str()));
        }
        let attached = state.card_labels.entry(card_id.clone()).or_default();
        if !attached.contains(label_id) {
            attached.push(label_id.clone());
        }
        Ok(())
    }
}
