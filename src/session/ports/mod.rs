//! Port definitions for the session context.

mod store;

pub use store::{SessionStore, SessionStoreError, SessionStoreResult};
