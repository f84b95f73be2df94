//! The work session record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SessionId;
use crate::board::domain::CardId;
use crate::plan::domain::{PlannedTask, ProgressSummary};

/// Tracks the card currently being worked on and the last synchronized
/// task batch.
///
/// The tracked batch is a full snapshot, never a delta: every
/// synchronization replaces it wholesale. The record carries no board
/// data of its own, so a lost or stale session costs at most one
/// re-discovery of the active card.
///
/// # Examples
///
/// ```
/// use aalto::session::domain::Session;
/// use mockable::DefaultClock;
///
/// let session = Session::new(&DefaultClock);
/// assert!(session.active_card_id.is_none());
/// assert!(session.tracked_tasks.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for this session.
    pub session_id: SessionId,

    /// Card the session is bound to (None before pickup or creation).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_card_id: Option<CardId>,

    /// Name of the bound card, kept for log and comment context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_card_name: Option<String>,

    /// Last task batch synchronized to the bound card.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracked_tasks: Vec<PlannedTask>,

    /// When the session started.
    pub created_at: DateTime<Utc>,

    /// When the session last bound a card or synchronized a batch.
    pub last_activity: DateTime<Utc>,
}

impl Session {
    /// Creates a fresh session with no bound card.
    #[must_use]
    pub fn new(clock: &impl mockable::Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            session_id: SessionId::new(),
            active_card_id: None,
            active_card_name: None,
            tracked_tasks: Vec::new(),
            created_at: timestamp,
            last_activity: timestamp,
        }
    }

    /// Creates a session bound to a card from the start.
    #[must_use]
    pub fn for_card(
        card_id: CardId,
        card_name: impl Into<String>,
        clock: &impl mockable::Clock,
    ) -> Self {
        let mut session = Self::new(clock);
        session.active_card_id = Some(card_id);
        session.active_card_name = Some(card_name.into());
        session
    }

    /// Binds the session to a card, replacing any previous binding.
    pub fn bind_card(
        &mut self,
        card_id: CardId,
        card_name: impl Into<String>,
        clock: &impl mockable::Clock,
    ) {
        self.active_card_id = Some(card_id);
        self.active_card_name = Some(card_name.into());
        self.touch(clock);
    }

    /// Replaces the tracked batch with a new full snapshot.
    pub fn replace_tasks(&mut self, tasks: Vec<PlannedTask>, clock: &impl mockable::Clock) {
        self.tracked_tasks = tasks;
        self.touch(clock);
    }

    /// Returns `true` when the session is bound to a card.
    #[must_use]
    pub const fn has_active_card(&self) -> bool {
        self.active_card_id.is_some()
    }

    /// Summarises the progress of the tracked batch.
    #[must_use]
    pub fn progress(&self) -> ProgressSummary {
        ProgressSummary::of(&self.tracked_tasks)
    }

    /// Updates the activity timestamp to the current clock time.
    fn touch(&mut self, clock: &impl mockable::Clock) {
        self.last_activity = clock.utc();
    }
}
