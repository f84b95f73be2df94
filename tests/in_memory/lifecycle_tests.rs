//! End-to-end card lifecycle tests: create, pickup, sync, complete.

use super::helpers::{EngineHarness, assert_single_checklist, harness, seed_lanes, task};
use aalto::plan::domain::TaskStatus;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn plan_to_completion_drives_card_across_the_board(harness: EngineHarness) {
    let lanes = seed_lanes(&harness.gateway);
    let plan = "# Ship search\n\n- design index\n- wire API";

    let card = harness
        .engine
        .create_from_plan(plan)
        .await
        .expect("card created from plan");
    assert_eq!(
        harness
            .gateway
            .card_snapshot(&card.id)
            .expect("card exists")
            .list_id,
        lanes.todo
    );

    let early = harness
        .engine
        .sync_batch(&[
            task("design index", TaskStatus::InProgress),
            task("wire API", TaskStatus::Pending),
        ])
        .await;
    assert!(early.success);
    assert_eq!(early.completed_count, 0);

    let late = harness
        .engine
        .sync_batch(&[
            task("design index", TaskStatus::Completed),
            task("wire API", TaskStatus::Completed),
        ])
        .await;
    assert!(late.success);
    assert_eq!(late.completed_count, 2);

    let completed = harness
        .engine
        .complete(Some("shipped"))
        .await
        .expect("card completed");
    assert_eq!(completed.list_id, lanes.done);

    assert_single_checklist(
        &harness.gateway,
        &card.id,
        &[("design index", true), ("wire API", true)],
    )
    .expect("checklist converged");
    assert_eq!(
        harness.gateway.comments_snapshot(&card.id),
        [
            "0/2 completed (1 in progress)".to_owned(),
            "2/2 completed (0 in progress)".to_owned(),
            "✅ Completed \"Ship search\" with 2/2 completed (0 in progress). Note: shipped"
                .to_owned(),
        ]
    );
    assert!(harness.sessions.snapshot().is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn pickup_then_sync_tracks_an_existing_card(harness: EngineHarness) {
    let lanes = seed_lanes(&harness.gateway);
    let card_id = harness.gateway.seed_card(
        &lanes.todo,
        "Harden auth flows",
        "Review token handling.\n\n- 📋 rotate signing keys\n- 📋 add rate limits",
    );

    let picked = harness
        .engine
        .pickup("harden auth")
        .await
        .expect("card picked up by partial name");
    assert_eq!(picked.id, card_id);
    assert_eq!(picked.list_id, lanes.in_progress);

    let outcome = harness
        .engine
        .sync_batch(&[
            task("rotate signing keys", TaskStatus::Completed),
            task("add rate limits", TaskStatus::InProgress),
        ])
        .await;

    assert!(outcome.success);
    let card = harness
        .gateway
        .card_snapshot(&card_id)
        .expect("card exists");
    assert_eq!(
        card.description,
        "Review token handling.\n\n- ✅ rotate signing keys\n- ⚙️ add rate limits"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn new_pickup_replaces_the_previous_binding(harness: EngineHarness) {
    let lanes = seed_lanes(&harness.gateway);
    let first = harness
        .gateway
        .seed_card(&lanes.todo, "First card", "One.");
    let second = harness
        .gateway
        .seed_card(&lanes.todo, "Second card", "Two.");

    harness
        .engine
        .pickup(first.as_str())
        .await
        .expect("first pickup");
    harness
        .engine
        .pickup(second.as_str())
        .await
        .expect("second pickup");

    let session = harness.sessions.snapshot().expect("session bound");
    assert_eq!(session.active_card_id, Some(second));
    assert!(session.tracked_tasks.is_empty());
}
