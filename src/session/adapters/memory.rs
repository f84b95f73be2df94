//! In-memory session store for tests and local development.

use async_trait::async_trait;
use std::sync::{Arc, PoisonError, RwLock};

use crate::session::{
    domain::Session,
    ports::{SessionStore, SessionStoreError, SessionStoreResult},
};

/// Thread-safe in-memory session store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    state: Arc<RwLock<Option<Session>>>,
}

impl InMemorySessionStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored session without going through the port,
    /// recovering from lock poisoning.
    #[must_use]
    pub fn snapshot(&self) -> Option<Session> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> SessionStoreResult<Option<Session>> {
        let state = self
            .state
            .read()
            .map_err(|err| SessionStoreError::storage(std::io::Error::other(err.to_string())))?;
        Ok(state.clone())
    }

    async fn save(&self, session: &Session) -> SessionStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| SessionStoreError::storage(std::io::Error::other(err.to_string())))?;
        *state = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> SessionStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| SessionStoreError::storage(std::io::Error::other(err.to_string())))?;
        *state = None;
        Ok(())
    }
}
