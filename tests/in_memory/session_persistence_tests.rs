//! Engine behaviour over the file-backed session store.

use std::sync::Arc;
use std::time::Duration;

use aalto::board::adapters::InMemoryBoardGateway;
use aalto::plan::domain::TaskStatus;
use aalto::session::adapters::FileSessionStore;
use aalto::session::ports::SessionStore;
use aalto::sync::services::{EngineConfig, SyncEngine};
use camino::Utf8PathBuf;
use mockable::DefaultClock;
use rstest::rstest;
use uuid::Uuid;

use super::helpers::{seed_lanes, task};

type FileBackedEngine = SyncEngine<InMemoryBoardGateway, FileSessionStore, DefaultClock>;

fn temp_session_path() -> Utf8PathBuf {
    let dir = std::env::temp_dir().join(format!("aalto-engine-{}", Uuid::new_v4()));
    Utf8PathBuf::from_path_buf(dir)
        .expect("temp dir is valid UTF-8")
        .join("session.json")
}

fn file_backed_engine(
    gateway: &Arc<InMemoryBoardGateway>,
    path: &Utf8PathBuf,
) -> FileBackedEngine {
    let store = FileSessionStore::open(path).expect("store opens");
    SyncEngine::new(
        Arc::clone(gateway),
        Arc::new(store),
        Arc::new(DefaultClock),
        EngineConfig::new().with_pacing(Duration::ZERO),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn session_survives_engine_restarts() {
    let gateway = Arc::new(InMemoryBoardGateway::new());
    seed_lanes(&gateway);
    let path = temp_session_path();

    let first = file_backed_engine(&gateway, &path);
    let card = first
        .create_from_plan("# Ship search\n\n- design index")
        .await
        .expect("card created");
    let outcome = first
        .sync_batch(&[task("design index", TaskStatus::InProgress)])
        .await;
    assert!(outcome.success);

    // A fresh engine over the same path resumes the same session.
    let second = file_backed_engine(&gateway, &path);
    let report = second.status().await.expect("status report");

    assert_eq!(report.card_id, Some(card.id));
    assert_eq!(report.progress.to_string(), "0/1 completed (1 in progress)");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completion_clears_the_stored_session_file() {
    let gateway = Arc::new(InMemoryBoardGateway::new());
    seed_lanes(&gateway);
    let path = temp_session_path();

    let engine = file_backed_engine(&gateway, &path);
    engine
        .create_from_plan("Ship search")
        .await
        .expect("card created");
    engine.complete(None).await.expect("card completed");

    let store = FileSessionStore::open(&path).expect("store opens");
    let loaded = store.load().await.expect("load succeeds");
    assert!(loaded.is_none());
}
