//! Shared test helpers for in-memory sync engine integration tests.

use std::sync::Arc;
use std::time::Duration;

use aalto::board::{
    adapters::InMemoryBoardGateway,
    domain::{CardId, ListId},
};
use aalto::plan::domain::{PlannedTask, TaskStatus};
use aalto::session::adapters::InMemorySessionStore;
use aalto::sync::services::{EngineConfig, SyncEngine};
use mockable::DefaultClock;
use rstest::fixture;

/// Engine wired to in-memory adapters, with handles kept for seeding and
/// inspection.
pub struct EngineHarness {
    /// The board double behind the engine.
    pub gateway: Arc<InMemoryBoardGateway>,
    /// The session store behind the engine.
    pub sessions: Arc<InMemorySessionStore>,
    /// The engine under test.
    pub engine: SyncEngine<InMemoryBoardGateway, InMemorySessionStore, DefaultClock>,
}

impl EngineHarness {
    /// Builds a harness around the given configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        let gateway = Arc::new(InMemoryBoardGateway::new());
        let sessions = Arc::new(InMemorySessionStore::new());
        let engine = SyncEngine::new(
            Arc::clone(&gateway),
            Arc::clone(&sessions),
            Arc::new(DefaultClock),
            config,
        );
        Self {
            gateway,
            sessions,
            engine,
        }
    }
}

/// Provides a fresh harness with pacing disabled for each test.
#[fixture]
pub fn harness() -> EngineHarness {
    EngineHarness::with_config(EngineConfig::new().with_pacing(Duration::ZERO))
}

/// Identifiers of the three standard workflow lanes.
pub struct Lanes {
    /// The "To Do" list.
    pub todo: ListId,
    /// The "In Progress" list.
    pub in_progress: ListId,
    /// The "Done" list.
    pub done: ListId,
}

/// Seeds the standard three-lane board.
pub fn seed_lanes(gateway: &InMemoryBoardGateway) -> Lanes {
    Lanes {
        todo: gateway.seed_list("To Do"),
        in_progress: gateway.seed_list("In Progress"),
        done: gateway.seed_list("Done"),
    }
}

/// Builds a task entry, panicking on invalid content.
pub fn task(content: &str, status: TaskStatus) -> PlannedTask {
    PlannedTask::new(content, status).expect("valid task")
}

/// Asserts a card carries exactly one checklist with the expected item
/// states.
///
/// # Errors
///
/// Returns an error when the card has an unexpected number of checklists
/// or the item names and tick states differ from `expected`.
pub fn assert_single_checklist(
    gateway: &InMemoryBoardGateway,
    card_id: &CardId,
    expected: &[(&str, bool)],
) -> Result<(), eyre::Report> {
    let checklists = gateway.checklists_snapshot(card_id);
    eyre::ensure!(
        checklists.len() == 1,
        "expected exactly one checklist, found {}",
        checklists.len()
    );
    let checklist = checklists
        .first()
        .ok_or_else(|| eyre::eyre!("expected a checklist"))?;
    let actual: Vec<(&str, bool)> = checklist
        .items
        .iter()
        .map(|item| (item.name.as_str(), item.completed))
        .collect();
    eyre::ensure!(
        actual == expected,
        "checklist state mismatch: expected {expected:?}, found {actual:?}"
    );
    Ok(())
}
