//! When steps for batch synchronization BDD scenarios.

use super::world::{SyncWorld, run_async};
use rstest_bdd_macros::when;

#[when("the batch is synchronized")]
fn synchronize_batch(world: &mut SyncWorld) {
    world.session_before_sync = world.sessions.snapshot();
    world.last_outcome = Some(run_async(world.engine.sync_batch(&world.batch)));
}
