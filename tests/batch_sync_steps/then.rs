//! Then steps for batch synchronization BDD scenarios.

use super::world::SyncWorld;
use aalto::board::domain::CardId;
use aalto::sync::domain::{StatusGlyph, TASKS_HEADING};
use rstest_bdd_macros::then;

#[then("the sync succeeds")]
fn sync_succeeds(world: &SyncWorld) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    eyre::ensure!(outcome.success, "sync failed: {outcome}");
    Ok(())
}

#[then("the sync fails")]
fn sync_fails(world: &SyncWorld) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    eyre::ensure!(!outcome.success, "expected the sync to fail");
    eyre::ensure!(outcome.error.is_some(), "expected an error message");
    Ok(())
}

#[then("no board operations were issued")]
fn no_board_operations(world: &SyncWorld) -> Result<(), eyre::Report> {
    let operations = world.gateway.operations();
    eyre::ensure!(
        operations.is_empty(),
        "expected no board operations, found {operations:?}"
    );
    Ok(())
}

#[then("the card description lists the batch under the tasks heading")]
fn description_lists_batch(world: &SyncWorld) -> Result<(), eyre::Report> {
    let card_id = tracked_card_id(world)?;
    let card = world
        .gateway
        .card_snapshot(card_id)
        .ok_or_else(|| eyre::eyre!("card not found on board"))?;
    eyre::ensure!(
        card.description.contains(TASKS_HEADING),
        "description lacks the tasks heading: {}",
        card.description
    );
    for task in &world.batch {
        let line = format!("- {} {}", StatusGlyph::of(task.status).as_str(), task.content);
        eyre::ensure!(
            card.description.contains(&line),
            "description lacks rendered line {line:?}: {}",
            card.description
        );
    }
    Ok(())
}

#[then(r#"a checklist mirrors the batch with "{ticked}" ticked"#)]
fn checklist_mirrors_batch(world: &SyncWorld, ticked: String) -> Result<(), eyre::Report> {
    let card_id = tracked_card_id(world)?;
    let checklists = world.gateway.checklists_snapshot(card_id);
    eyre::ensure!(
        checklists.len() == 1,
        "expected exactly one checklist, found {}",
        checklists.len()
    );
    let checklist = checklists
        .first()
        .ok_or_else(|| eyre::eyre!("expected a checklist"))?;
    let expected: Vec<(String, bool)> = world
        .batch
        .iter()
        .map(|task| (task.content.clone(), task.content == ticked))
        .collect();
    let actual: Vec<(String, bool)> = checklist
        .items
        .iter()
        .map(|item| (item.name.clone(), item.completed))
        .collect();
    eyre::ensure!(
        actual == expected,
        "checklist mismatch: expected {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"the progress comment reads "{text}""#)]
fn progress_comment_reads(world: &SyncWorld, text: String) -> Result<(), eyre::Report> {
    let card_id = tracked_card_id(world)?;
    let comment = world
        .gateway
        .comments_snapshot(card_id)
        .last()
        .cloned()
        .ok_or_else(|| eyre::eyre!("expected at least one comment"))?;
    eyre::ensure!(
        comment == text,
        "expected comment {text:?}, found {comment:?}"
    );
    Ok(())
}

#[then("the board received only reads and a progress comment")]
fn board_received_only_reads_and_comment(world: &SyncWorld) -> Result<(), eyre::Report> {
    let operations = world.gateway.operations();
    let expected = ["fetch_card", "fetch_checklists", "add_comment"].map(str::to_owned);
    eyre::ensure!(
        operations == expected,
        "unexpected operations: {operations:?}"
    );
    Ok(())
}

#[then("the session keeps its previous snapshot")]
fn session_keeps_previous_snapshot(world: &SyncWorld) -> Result<(), eyre::Report> {
    let before = world
        .session_before_sync
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no pre-sync session recorded"))?;
    let after = world
        .sessions
        .snapshot()
        .ok_or_else(|| eyre::eyre!("expected the session to survive"))?;
    eyre::ensure!(
        after.tracked_tasks == before.tracked_tasks,
        "tracked batch changed despite the failed sync"
    );
    Ok(())
}

fn last_outcome(world: &SyncWorld) -> Result<&aalto::sync::services::SyncOutcome, eyre::Report> {
    world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing sync outcome in scenario world"))
}

fn tracked_card_id(world: &SyncWorld) -> Result<&CardId, eyre::Report> {
    world
        .card_id
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no tracked card in scenario world"))
}
