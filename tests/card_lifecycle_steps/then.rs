//! Then steps for card lifecycle BDD scenarios.

use super::world::LifecycleWorld;
use aalto::board::domain::ListRole;
use aalto::sync::services::WorkflowError;
use eyre::WrapErr;
use rstest_bdd_macros::then;

#[then(r#"the card sits in the "{role}" lane"#)]
fn card_sits_in_lane(world: &LifecycleWorld, role: String) -> Result<(), eyre::Report> {
    let lane_role = ListRole::try_from(role.as_str()).wrap_err("parse lane role")?;
    let expected = world.lane(lane_role)?;
    let card_id = world
        .card_id
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no card recorded in scenario world"))?;
    let card = world
        .gateway
        .card_snapshot(card_id)
        .ok_or_else(|| eyre::eyre!("card not found on board"))?;
    eyre::ensure!(
        card.list_id == *expected,
        "expected card in {lane_role} lane, found list {}",
        card.list_id
    );
    Ok(())
}

#[then("the session is bound to the card")]
fn session_is_bound(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    let card_id = world
        .card_id
        .clone()
        .ok_or_else(|| eyre::eyre!("no card recorded in scenario world"))?;
    let session = world
        .sessions
        .snapshot()
        .ok_or_else(|| eyre::eyre!("expected a stored session"))?;
    eyre::ensure!(
        session.active_card_id == Some(card_id),
        "session bound to a different card"
    );
    Ok(())
}

#[then("no session remains")]
fn no_session_remains(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.sessions.snapshot().is_none(),
        "expected the session to be cleared"
    );
    Ok(())
}

#[then("the latest comment notes the pickup")]
fn latest_comment_notes_pickup(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    let comment = latest_comment(world)?;
    eyre::ensure!(
        comment.starts_with("⚙️ Picked up"),
        "unexpected pickup comment: {comment}"
    );
    Ok(())
}

#[then("the latest comment notes the completion")]
fn latest_comment_notes_completion(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    let comment = latest_comment(world)?;
    eyre::ensure!(
        comment.starts_with("✅ Completed"),
        "unexpected completion comment: {comment}"
    );
    Ok(())
}

#[then("completion fails because no card is active")]
fn completion_fails_without_card(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_card_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing completion result in scenario world"))?;
    eyre::ensure!(
        matches!(result, Err(WorkflowError::NoActiveCard)),
        "expected NoActiveCard, got {result:?}"
    );
    Ok(())
}

fn latest_comment(world: &LifecycleWorld) -> Result<String, eyre::Report> {
    let card_id = world
        .card_id
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no card recorded in scenario world"))?;
    world
        .gateway
        .comments_snapshot(card_id)
        .last()
        .cloned()
        .ok_or_else(|| eyre::eyre!("expected at least one comment"))
}
