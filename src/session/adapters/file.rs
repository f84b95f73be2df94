//! Flat-file session store backed by capability-scoped filesystem access.
//!
//! The session is stored as a single JSON document. The store opens the
//! document's parent directory once at construction time and performs all
//! later reads and writes relative to that handle.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::sync::Arc;

use crate::session::{
    domain::Session,
    ports::{SessionStore, SessionStoreError, SessionStoreResult},
};

/// Session store persisting the record as a JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: Arc<Dir>,
    file_name: String,
}

impl FileSessionStore {
    /// Opens a store rooted at the session file's parent directory,
    /// creating missing directories.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Storage`] when the path has no file
    /// name or the parent directory cannot be created or opened.
    pub fn open(path: &Utf8Path) -> SessionStoreResult<Self> {
        let file_name = path.file_name().ok_or_else(|| {
            SessionStoreError::storage(std::io::Error::other(
                "session path must include a file name",
            ))
        })?;
        let parent = path.parent().unwrap_or_else(|| Utf8Path::new("."));
        Dir::create_ambient_dir_all(parent, ambient_authority())
            .map_err(SessionStoreError::storage)?;
        let dir =
            Dir::open_ambient_dir(parent, ambient_authority()).map_err(SessionStoreError::storage)?;
        Ok(Self {
            dir: Arc::new(dir),
            file_name: file_name.to_owned(),
        })
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> SessionStoreResult<Option<Session>> {
        match self.dir.read_to_string(&self.file_name) {
            Ok(contents) => serde_json::from_str(&contents)
                .map(Some)
                .map_err(SessionStoreError::serialization),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SessionStoreError::storage(err)),
        }
    }

    async fn save(&self, session: &Session) -> SessionStoreResult<()> {
        let contents =
            serde_json::to_string_pretty(session).map_err(SessionStoreError::serialization)?;
        self.dir
            .write(&self.file_name, contents)
            .map_err(SessionStoreError::storage)
    }

    async fn clear(&self) -> SessionStoreResult<()> {
        match self.dir.remove_file(&self.file_name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionStoreError::storage(err)),
        }
    }
}
