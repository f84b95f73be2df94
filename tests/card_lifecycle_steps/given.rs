//! Given steps for card lifecycle BDD scenarios.

use super::world::{LifecycleWorld, run_async};
use aalto::board::domain::ListRole;
use aalto::session::{domain::Session, ports::SessionStore};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;

#[given("a board with the standard lanes")]
fn board_with_standard_lanes(world: &mut LifecycleWorld) {
    world.lanes = vec![
        (ListRole::Todo, world.gateway.seed_list("To Do")),
        (ListRole::InProgress, world.gateway.seed_list("In Progress")),
        (ListRole::Done, world.gateway.seed_list("Done")),
    ];
}

#[given(r#"a card "{name}" in the "{role}" lane"#)]
fn card_in_lane(
    world: &mut LifecycleWorld,
    name: String,
    role: String,
) -> Result<(), eyre::Report> {
    let lane_role = ListRole::try_from(role.as_str()).wrap_err("parse lane role")?;
    let list_id = world.lane(lane_role)?.clone();
    let card_id = world.gateway.seed_card(&list_id, name, "Build it.");
    world.card_id = Some(card_id);
    Ok(())
}

#[given("the session is bound to that card")]
fn session_bound_to_card(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    let card_id = world
        .card_id
        .clone()
        .ok_or_else(|| eyre::eyre!("no card seeded in scenario world"))?;
    let card = world
        .gateway
        .card_snapshot(&card_id)
        .ok_or_else(|| eyre::eyre!("seeded card vanished"))?;
    let session = Session::for_card(card_id, card.name, &DefaultClock);
    run_async(world.sessions.save(&session)).wrap_err("save session")?;
    Ok(())
}
