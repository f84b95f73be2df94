//! When steps for card lifecycle BDD scenarios.

use super::world::{LifecycleWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"a card is created from the plan titled "{title}""#)]
fn create_card_from_plan(world: &mut LifecycleWorld, title: String) {
    let plan = format!("# {title}\n\n- design index\n- wire API");
    let result = run_async(world.engine.create_from_plan(&plan));
    if let Ok(card) = &result {
        world.card_id = Some(card.id.clone());
    }
    world.last_card_result = Some(result);
}

#[when(r#"the card is picked up as "{identifier}""#)]
fn pick_up_card(world: &mut LifecycleWorld, identifier: String) {
    let result = run_async(world.engine.pickup(&identifier));
    if let Ok(card) = &result {
        world.card_id = Some(card.id.clone());
    }
    world.last_card_result = Some(result);
}

#[when(r#"the card is completed with note "{note}""#)]
fn complete_card_with_note(world: &mut LifecycleWorld, note: String) {
    world.last_card_result = Some(run_async(world.engine.complete(Some(&note))));
}

#[when("the card is completed without a note")]
fn complete_card_without_note(world: &mut LifecycleWorld) {
    world.last_card_result = Some(run_async(world.engine.complete(None)));
}
