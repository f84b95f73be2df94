//! Orchestration services for the sync context.

mod engine;
mod notes;

pub use engine::{
    EngineConfig, StatusReport, SyncEngine, SyncOutcome, WorkflowError, WorkflowResult,
};
pub use notes::{NoteRenderError, completion_note, pickup_note};
