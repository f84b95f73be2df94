//! Given steps for batch synchronization BDD scenarios.

use super::world::{SyncWorld, run_async};
use aalto::board::domain::ListRole;
use aalto::plan::domain::{PlannedTask, TaskStatus};
use aalto::session::{domain::Session, ports::SessionStore};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;

#[given("a board with the standard lanes")]
fn board_with_standard_lanes(world: &mut SyncWorld) {
    world.lanes = vec![
        (ListRole::Todo, world.gateway.seed_list("To Do")),
        (ListRole::InProgress, world.gateway.seed_list("In Progress")),
        (ListRole::Done, world.gateway.seed_list("Done")),
    ];
}

#[given(r#"a tracked card "{name}" described as "{description}""#)]
fn tracked_card(
    world: &mut SyncWorld,
    name: String,
    description: String,
) -> Result<(), eyre::Report> {
    let list_id = world.lane(ListRole::InProgress)?.clone();
    let card_id = world.gateway.seed_card(&list_id, name.clone(), description);
    let session = Session::for_card(card_id.clone(), name, &DefaultClock);
    run_async(world.sessions.save(&session)).wrap_err("save session")?;
    world.card_id = Some(card_id);
    Ok(())
}

#[given(r#"the batch contains task "{content}" with status "{status}""#)]
fn batch_contains_task(
    world: &mut SyncWorld,
    content: String,
    status: String,
) -> Result<(), eyre::Report> {
    let parsed = TaskStatus::try_from(status.as_str()).wrap_err("parse task status")?;
    let task = PlannedTask::new(content, parsed).wrap_err("build task")?;
    world.batch.push(task);
    Ok(())
}

#[given("the batch was already synchronized once")]
fn batch_already_synchronized(world: &mut SyncWorld) -> Result<(), eyre::Report> {
    let outcome = run_async(world.engine.sync_batch(&world.batch));
    eyre::ensure!(outcome.success, "prior sync failed: {outcome}");
    world.gateway.clear_operations();
    Ok(())
}

#[given("the board rejects comment operations")]
fn board_rejects_comments(world: &mut SyncWorld) {
    world.gateway.fail_operation("add_comment");
}
