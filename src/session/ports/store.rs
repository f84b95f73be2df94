//! Store port for work session persistence.

use crate::session::domain::Session;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for session store operations.
pub type SessionStoreResult<T> = Result<T, SessionStoreError>;

/// Session persistence contract.
///
/// A store holds at most one session. Saving replaces the stored record
/// wholesale; there is no partial update.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads the stored session.
    ///
    /// Returns `None` when no session has been saved or the store was
    /// cleared.
    async fn load(&self) -> SessionStoreResult<Option<Session>>;

    /// Saves the session, replacing any previously stored record.
    async fn save(&self, session: &Session) -> SessionStoreResult<()>;

    /// Removes the stored session, if any.
    ///
    /// Clearing an empty store is not an error.
    async fn clear(&self) -> SessionStoreResult<()>;
}

/// Errors returned by session store implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    /// The stored record could not be encoded or decoded.
    #[error("session serialization error: {0}")]
    Serialization(Arc<dyn std::error::Error + Send + Sync>),

    /// Storage-layer failure.
    #[error("session storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionStoreError {
    /// Wraps a serialization error.
    pub fn serialization(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Serialization(Arc::new(err))
    }

    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
