//! The synchronization engine orchestrating card lifecycle and batch sync.

use std::sync::Arc;
use std::time::Duration;

use mockable::Clock;
use thiserror::Error;

use super::notes::{self, NoteRenderError};
use crate::board::{
    domain::{
        Card, CardDraft, CardId, CardPatch, Label, ListDirectory, ListRole, ListRoleNames,
        UnconfiguredListError,
    },
    ports::{BoardGateway, BoardGatewayError},
};
use crate::plan::domain::{PlannedTask, ProgressSummary};
use crate::session::{
    domain::Session,
    ports::{SessionStore, SessionStoreError},
};
use crate::sync::domain::{
    ChecklistPlan, ChecklistReconciliation, MatcherPipeline, plan_checklist_sync,
    reconcile_description,
};

/// Service-level errors for engine operations.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// No active card is bound to the session.
    #[error("no active card is bound to the session")]
    NoActiveCard,

    /// No card matched a pickup identifier.
    #[error("no card matches '{0}'")]
    CardNotFound(String),

    /// Plan text contained nothing usable as a card name.
    #[error("plan text must not be empty")]
    EmptyPlan,

    /// The board lacks a list for a required role.
    #[error(transparent)]
    UnconfiguredList(#[from] UnconfiguredListError),

    /// A remote board operation failed.
    #[error(transparent)]
    Gateway(#[from] BoardGatewayError),

    /// Session persistence failed.
    #[error(transparent)]
    Session(#[from] SessionStoreError),

    /// A comment template failed to render.
    #[error(transparent)]
    Note(#[from] NoteRenderError),
}

/// Result type for engine operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Tuning and naming knobs for the engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Synonym table used to discover board lists by role.
    pub list_names: ListRoleNames,

    /// Name given to the checklist seeded on first sync.
    pub checklist_name: String,

    /// Board label attached to cards created from plans, when set.
    pub tracking_label: Option<String>,

    /// Delay inserted between successive remote mutations.
    pub pacing: Duration,
}

impl EngineConfig {
    /// Default delay between successive remote mutations.
    pub const DEFAULT_PACING: Duration = Duration::from_millis(250);

    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the list-role synonym table.
    #[must_use]
    pub fn with_list_names(mut self, list_names: ListRoleNames) -> Self {
        self.list_names = list_names;
        self
    }

    /// Sets the name for seeded checklists.
    #[must_use]
    pub fn with_checklist_name(mut self, name: impl Into<String>) -> Self {
        self.checklist_name = name.into();
        self
    }

    /// Sets the label attached to cards created from plans.
    #[must_use]
    pub fn with_tracking_label(mut self, label: impl Into<String>) -> Self {
        self.tracking_label = Some(label.into());
        self
    }

    /// Sets the delay between successive remote mutations. Zero disables
    /// pacing.
    #[must_use]
    pub const fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            list_names: ListRoleNames::default(),
            checklist_name: "Tasks".to_owned(),
            tracking_label: None,
            pacing: Self::DEFAULT_PACING,
        }
    }
}

/// Outcome of synchronizing one task batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Whether every remote operation of the batch succeeded.
    pub success: bool,

    /// Completed tasks in the batch.
    pub completed_count: usize,

    /// Total tasks in the batch.
    pub total_count: usize,

    /// Set when the sync was a deliberate no-op because no card is bound.
    pub no_active_card: bool,

    /// Message of the failure that aborted the batch, if any.
    pub error: Option<String>,
}

impl SyncOutcome {
    /// Outcome for a sync invoked without a bound card: success, nothing
    /// to do.
    #[must_use]
    pub const fn no_active_card() -> Self {
        Self {
            success: true,
            completed_count: 0,
            total_count: 0,
            no_active_card: true,
            error: None,
        }
    }

    /// Outcome for a fully synchronized batch.
    #[must_use]
    pub const fn succeeded(progress: ProgressSummary) -> Self {
        Self {
            success: true,
            completed_count: progress.completed(),
            total_count: progress.total(),
            no_active_card: false,
            error: None,
        }
    }

    /// Outcome for a batch aborted by a failure.
    #[must_use]
    pub fn failed(progress: ProgressSummary, error: impl Into<String>) -> Self {
        Self {
            success: false,
            completed_count: progress.completed(),
            total_count: progress.total(),
            no_active_card: false,
            error: Some(error.into()),
        }
    }
}

impl std::fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(error) = &self.error {
            return write!(f, "sync failed: {error}");
        }
        if self.no_active_card {
            return f.write_str("no active card; nothing to sync");
        }
        write!(
            f,
            "synced {}/{} completed tasks",
            self.completed_count, self.total_count
        )
    }
}

/// Snapshot of the active card and tracked batch, for operator display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// Identifier of the bound card, if any.
    pub card_id: Option<CardId>,

    /// Name of the bound card, if any.
    pub card_name: Option<String>,

    /// Role of the list currently holding the card, when recognized.
    pub list_role: Option<ListRole>,

    /// Progress of the tracked batch.
    pub progress: ProgressSummary,
}

impl StatusReport {
    /// Report for a session with no bound card.
    #[must_use]
    pub fn unbound() -> Self {
        Self {
            card_id: None,
            card_name: None,
            list_role: None,
            progress: ProgressSummary::default(),
        }
    }
}

impl std::fmt::Display for StatusReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(name) = &self.card_name else {
            return f.write_str("no active card");
        };
        match self.list_role {
            Some(role) => write!(f, "\"{name}\" is in the {role} lane: {}", self.progress),
            None => write!(f, "\"{name}\" is in an unrecognized lane: {}", self.progress),
        }
    }
}

/// Engine keeping one tracked card in agreement with planner batches.
///
/// Orchestrates the complete card lifecycle:
/// 1. `create_from_plan` posts a new card to the to-do lane
/// 2. `pickup` moves an existing card to the in-progress lane
/// 3. `sync_batch` rewrites the task block, reconciles checklists, and
///    posts a progress comment
/// 4. `complete` moves the card to the done lane and ends the session
///
/// Remote mutations within one operation are paced by the configured
/// delay. The session snapshot is persisted only after every remote call
/// of an operation has succeeded, so a failed operation leaves the
/// previous snapshot intact for retry.
///
/// # Example
///
/// ```ignore
/// use aalto::sync::services::{EngineConfig, SyncEngine};
///
/// let engine = SyncEngine::new(gateway, sessions, clock, EngineConfig::new());
///
/// engine.create_from_plan("# Ship search\n- design index\n- wire API").await?;
/// let outcome = engine.sync_batch(&tasks).await;
/// assert!(outcome.success);
/// ```
#[derive(Clone)]
pub struct SyncEngine<G, S, C>
where
    G: BoardGateway,
    S: SessionStore,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    sessions: Arc<S>,
    clock: Arc<C>,
    config: EngineConfig,
}

impl<G, S, C> SyncEngine<G, S, C>
where
    G: BoardGateway,
    S: SessionStore,
    C: Clock + Send + Sync,
{
    /// Creates a new engine.
    #[must_use]
    pub const fn new(
        gateway: Arc<G>,
        sessions: Arc<S>,
        clock: Arc<C>,
        config: EngineConfig,
    ) -> Self {
        Self {
            gateway,
            sessions,
            clock,
            config,
        }
    }

    /// Creates a card from plan text and binds a fresh session to it.
    ///
    /// The card is named after the first non-empty plan line (heading
    /// markers stripped) and placed in the to-do lane with the full plan
    /// text as its description. When a tracking label is configured it is
    /// attached best-effort; label failures are logged and never fail the
    /// operation.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::EmptyPlan`] when the plan has no usable
    /// content, [`WorkflowError::UnconfiguredList`] when the board has no
    /// to-do lane, and gateway or session errors when a remote call or
    /// the session save fails.
    pub async fn create_from_plan(&self, plan_text: &str) -> WorkflowResult<Card> {
        let name = plan_card_name(plan_text).ok_or(WorkflowError::EmptyPlan)?;
        let directory = self.list_directory().await?;
        let todo = directory.require(ListRole::Todo)?;

        let mut pacer = Pacer::new(self.config.pacing);
        pacer.pace().await;
        let draft = CardDraft::new(name, plan_text, todo.id.clone());
        let card = self.gateway.create_card(draft).await?;
        tracing::info!(card_id = %card.id, name = card.name.as_str(), "created card from plan");

        self.attach_tracking_label(&card.id, &mut pacer).await;

        let session = Session::for_card(card.id.clone(), card.name.clone(), self.clock.as_ref());
        self.sessions.save(&session).await?;
        Ok(card)
    }

    /// Picks up a card by identifier or name and starts a fresh session.
    ///
    /// The identifier is tried as a card id first; when the board reports
    /// it unknown, a name search is run and the first card whose name
    /// case-insensitively equals, contains, or is contained by the
    /// identifier wins. The card is moved to the in-progress lane and a
    /// pickup comment is posted.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::CardNotFound`] when nothing matches, and
    /// [`WorkflowError::UnconfiguredList`] when the board has no
    /// in-progress lane.
    pub async fn pickup(&self, identifier: &str) -> WorkflowResult<Card> {
        let card = self.resolve_card(identifier).await?;
        let directory = self.list_directory().await?;
        let in_progress = directory.require(ListRole::InProgress)?;

        let mut pacer = Pacer::new(self.config.pacing);
        pacer.pace().await;
        let moved = self.gateway.move_card(&card.id, &in_progress.id).await?;
        let note = notes::pickup_note(&moved.name, &in_progress.name)?;
        pacer.pace().await;
        self.gateway.add_comment(&moved.id, &note).await?;

        let session = Session::for_card(moved.id.clone(), moved.name.clone(), self.clock.as_ref());
        self.sessions.save(&session).await?;
        tracing::info!(card_id = %moved.id, "picked up card");
        Ok(moved)
    }

    /// Synchronizes one task batch against the bound card.
    ///
    /// Without a bound card this is a deliberate no-op reported as
    /// success, because upstream hooks invoke sync unconditionally. With
    /// a bound card the description task block is rewritten, checklist
    /// completion state is reconciled, the session snapshot is replaced
    /// wholesale, and one progress comment is posted.
    ///
    /// Any remote failure aborts the remaining remote operations and is
    /// embedded in the outcome; the session keeps its previous snapshot
    /// so a retried sync re-derives from known-good state. A failed
    /// progress comment fails the whole batch.
    pub async fn sync_batch(&self, tasks: &[PlannedTask]) -> SyncOutcome {
        let loaded = match self.sessions.load().await {
            Ok(loaded) => loaded,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load session for sync");
                return SyncOutcome::failed(ProgressSummary::of(tasks), err.to_string());
            }
        };
        let Some(mut session) = loaded else {
            return SyncOutcome::no_active_card();
        };
        let Some(card_id) = session.active_card_id.clone() else {
            return SyncOutcome::no_active_card();
        };

        match self.sync_card(&mut session, &card_id, tasks).await {
            Ok(progress) => {
                tracing::info!(card_id = %card_id, progress = %progress, "synchronized batch");
                SyncOutcome::succeeded(progress)
            }
            Err(err) => {
                tracing::warn!(card_id = %card_id, error = %err, "batch sync aborted");
                SyncOutcome::failed(ProgressSummary::of(tasks), err.to_string())
            }
        }
    }

    /// Completes the bound card: moves it to the done lane, posts a
    /// completion comment, and clears the session.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::NoActiveCard`] when no card is bound and
    /// [`WorkflowError::UnconfiguredList`] when the board has no done
    /// lane. The session is cleared only after every remote call has
    /// succeeded.
    pub async fn complete(&self, note: Option<&str>) -> WorkflowResult<Card> {
        let session = self
            .sessions
            .load()
            .await?
            .ok_or(WorkflowError::NoActiveCard)?;
        let card_id = session
            .active_card_id
            .clone()
            .ok_or(WorkflowError::NoActiveCard)?;

        let card = self.gateway.fetch_card(&card_id).await?;
        let directory = self.list_directory().await?;
        let done = directory.require(ListRole::Done)?;

        let mut pacer = Pacer::new(self.config.pacing);
        pacer.pace().await;
        let moved = self.gateway.move_card(&card.id, &done.id).await?;
        let text = notes::completion_note(&moved.name, &session.progress(), note)?;
        pacer.pace().await;
        self.gateway.add_comment(&moved.id, &text).await?;

        self.sessions.clear().await?;
        tracing::info!(card_id = %moved.id, "completed card");
        Ok(moved)
    }

    /// Reports the bound card, its lane, and tracked progress.
    ///
    /// Issues no mutations. An unbound session yields a report with no
    /// card rather than an error.
    ///
    /// # Errors
    ///
    /// Returns gateway errors when the card or list fetch fails,
    /// including [`BoardGatewayError::NotFound`] when the bound card no
    /// longer exists remotely.
    pub async fn status(&self) -> WorkflowResult<StatusReport> {
        let Some(session) = self.sessions.load().await? else {
            return Ok(StatusReport::unbound());
        };
        let Some(card_id) = session.active_card_id.clone() else {
            return Ok(StatusReport::unbound());
        };

        let card = self.gateway.fetch_card(&card_id).await?;
        let directory = self.list_directory().await?;
        Ok(StatusReport {
            list_role: directory.role_of_list(&card.list_id),
            card_id: Some(card.id),
            card_name: Some(card.name),
            progress: session.progress(),
        })
    }

    /// Binds the session to an existing card matching one of the given
    /// tasks, bootstrapping the association before a first sync.
    ///
    /// Tasks are tried in batch order; for each, the board is searched by
    /// content and the first card whose name case-insensitively equals,
    /// contains, or is contained by the content is bound. The scan stops
    /// at the first binding. A session already bound to a card, or a scan
    /// with no match, is a no-op; no match is not an error.
    ///
    /// # Errors
    ///
    /// Returns gateway errors when a search fails and session errors when
    /// the binding cannot be saved.
    pub async fn link_existing(&self, tasks: &[PlannedTask]) -> WorkflowResult<Option<Card>> {
        let mut session = match self.sessions.load().await? {
            Some(existing) => existing,
            None => Session::new(self.clock.as_ref()),
        };
        if session.has_active_card() {
            return Ok(None);
        }

        for task in tasks {
            let hits = self.gateway.search_cards(&task.content).await?;
            let Some(card) = hits
                .into_iter()
                .find(|card| card_name_matches(&card.name, &task.content))
            else {
                continue;
            };
            session.bind_card(card.id.clone(), card.name.clone(), self.clock.as_ref());
            self.sessions.save(&session).await?;
            tracing::info!(
                card_id = %card.id,
                task = task.content.as_str(),
                "linked existing card"
            );
            return Ok(Some(card));
        }
        Ok(None)
    }

    async fn sync_card(
        &self,
        session: &mut Session,
        card_id: &CardId,
        tasks: &[PlannedTask],
    ) -> WorkflowResult<ProgressSummary> {
        let card = self.gateway.fetch_card(card_id).await?;
        let mut pacer = Pacer::new(self.config.pacing);

        let next_body = reconcile_description(&card.description, tasks);
        if next_body == card.description {
            tracing::debug!(card_id = %card_id, "description already up to date");
        } else {
            pacer.pace().await;
            let patch = CardPatch::new().with_description(next_body);
            self.gateway.update_card(card_id, patch).await?;
        }

        self.sync_checklists(card_id, tasks, &mut pacer).await?;

        let progress = ProgressSummary::of(tasks);
        pacer.pace().await;
        self.gateway.add_comment(card_id, &progress.to_string()).await?;

        session.replace_tasks(tasks.to_vec(), self.clock.as_ref());
        self.sessions.save(session).await?;
        Ok(progress)
    }

    async fn sync_checklists(
        &self,
        card_id: &CardId,
        tasks: &[PlannedTask],
        pacer: &mut Pacer,
    ) -> WorkflowResult<()> {
        let checklists = self.gateway.fetch_checklists(card_id).await?;
        let matchers = MatcherPipeline::default();
        match plan_checklist_sync(&checklists, tasks, &matchers) {
            ChecklistPlan::Seed(item_names) => {
                pacer.pace().await;
                let created = self
                    .gateway
                    .create_checklist(card_id, &self.config.checklist_name, &item_names)
                    .await?;
                // Seeded items start unticked; bring completed tasks into
                // agreement immediately.
                let seeded = vec![created];
                if let ChecklistPlan::Reconcile(reconciliation) =
                    plan_checklist_sync(&seeded, tasks, &matchers)
                {
                    self.apply_item_updates(card_id, &reconciliation, pacer)
                        .await?;
                }
            }
            ChecklistPlan::Reconcile(reconciliation) => {
                self.apply_item_updates(card_id, &reconciliation, pacer)
                    .await?;
            }
        }
        Ok(())
    }

    async fn apply_item_updates(
        &self,
        card_id: &CardId,
        reconciliation: &ChecklistReconciliation,
        pacer: &mut Pacer,
    ) -> WorkflowResult<()> {
        for content in &reconciliation.unmatched {
            tracing::debug!(task = content.as_str(), "no checklist item matched task");
        }
        for update in &reconciliation.updates {
            pacer.pace().await;
            self.gateway
                .set_item_completion(card_id, &update.item_id, update.completed)
                .await?;
        }
        Ok(())
    }

    /// Attaches the configured tracking label to a card, best-effort.
    async fn attach_tracking_label(&self, card_id: &CardId, pacer: &mut Pacer) {
        let Some(label_name) = self.config.tracking_label.as_deref() else {
            return;
        };
        match self.find_label(label_name).await {
            Ok(Some(label)) => {
                pacer.pace().await;
                if let Err(err) = self.gateway.add_label(card_id, &label.id).await {
                    tracing::warn!(
                        error = %err,
                        label = label_name,
                        "failed to attach tracking label"
                    );
                }
            }
            Ok(None) => {
                tracing::debug!(label = label_name, "tracking label not defined on board");
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    label = label_name,
                    "failed to look up tracking label"
                );
            }
        }
    }

    async fn find_label(&self, name: &str) -> Result<Option<Label>, BoardGatewayError> {
        let labels = self.gateway.fetch_labels().await?;
        Ok(labels
            .into_iter()
            .find(|label| label.name.eq_ignore_ascii_case(name)))
    }

    async fn list_directory(&self) -> WorkflowResult<ListDirectory> {
        let lists = self.gateway.fetch_lists().await?;
        Ok(ListDirectory::classify(&lists, &self.config.list_names))
    }

    async fn resolve_card(&self, identifier: &str) -> WorkflowResult<Card> {
        match self.gateway.fetch_card(&CardId::new(identifier)).await {
            Ok(card) => return Ok(card),
            Err(err) if err.is_not_found() => {}
            Err(err) => return Err(err.into()),
        }
        let hits = self.gateway.search_cards(identifier).await?;
        hits.into_iter()
            .find(|card| card_name_matches(&card.name, identifier))
            .ok_or_else(|| WorkflowError::CardNotFound(identifier.to_owned()))
    }
}

/// Spaces successive remote mutations to respect board rate limits.
///
/// The first mutation goes out immediately; each later one waits the
/// configured delay first. A zero delay disables pacing entirely.
struct Pacer {
    delay: Duration,
    primed: bool,
}

impl Pacer {
    const fn new(delay: Duration) -> Self {
        Self {
            delay,
            primed: false,
        }
    }

    async fn pace(&mut self) {
        if !self.primed {
            self.primed = true;
            return;
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// Derives a card name from plan text: the first non-empty line with any
/// heading markers stripped.
fn plan_card_name(plan_text: &str) -> Option<&str> {
    plan_text
        .lines()
        .map(|line| line.trim().trim_start_matches('#').trim())
        .find(|candidate| !candidate.is_empty())
}

/// Case-insensitive equality or mutual containment between a card name
/// and task content.
fn card_name_matches(card_name: &str, content: &str) -> bool {
    let name = card_name.trim().to_lowercase();
    let needle = content.trim().to_lowercase();
    if name.is_empty() || needle.is_empty() {
        return false;
    }
    name == needle || name.contains(&needle) || needle.contains(&name)
}
