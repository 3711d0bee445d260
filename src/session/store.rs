//! File-backed session store.
//!
//! The whole collection is serialized to one JSON file. Every mutation is
//! flushed back in full before control returns to the chat loop; there is no
//! partial persistence and no locking (single-user, single-process tool).

use super::{Session, SessionCollection};
use crate::error::{PratError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Stores the session collection as a single JSON file.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted collection.
    ///
    /// If no file exists yet, an empty collection is written out first so a
    /// subsequent load observes the same state (idempotent bootstrap).
    pub fn load(&self) -> Result<SessionCollection> {
        if !self.path.exists() {
            debug!("No session file at {}, initializing", self.path.display());
            let empty = SessionCollection::default();
            self.save(&empty)?;
            return Ok(empty);
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| PratError::Storage(format!("{}: {}", self.path.display(), e)))?;
        let collection: SessionCollection = serde_json::from_str(&content)
            .map_err(|e| PratError::Storage(format!("{}: {}", self.path.display(), e)))?;
        Ok(collection)
    }

    /// Overwrite the durable record with the given collection, fully serialized.
    pub fn save(&self, collection: &SessionCollection) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| PratError::Storage(format!("{}: {}", parent.display(), e)))?;
        }
        let content = serde_json::to_string_pretty(collection)?;
        std::fs::write(&self.path, content)
            .map_err(|e| PratError::Storage(format!("{}: {}", self.path.display(), e)))?;
        debug!(
            "Persisted {} session(s) to {}",
            collection.sessions.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Load the collection, synthesizing one fresh session if it is empty.
    ///
    /// Guarantees at least one session exists before any UI interaction, and
    /// persists the synthesized session immediately.
    pub fn bootstrap(&self) -> Result<SessionCollection> {
        let mut collection = self.load()?;
        if collection.sessions.is_empty() {
            let session = Session::new();
            info!("Bootstrapping first session {}", session.session_id);
            collection.sessions.push(session);
            self.save(&collection)?;
        }
        Ok(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Message, SENTINEL_SUMMARY};

    fn temp_store() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("conversations.json"));
        (dir, store)
    }

    #[test]
    fn test_bootstrap_creates_one_sentinel_session() {
        let (_dir, store) = temp_store();

        let collection = store.bootstrap().unwrap();
        assert_eq!(collection.sessions.len(), 1);
        assert_eq!(collection.sessions[0].summary, SENTINEL_SUMMARY);
        assert!(collection.sessions[0].messages.is_empty());

        // Bootstrap persisted the session, so a plain load sees it.
        let reloaded = store.load().unwrap();
        assert_eq!(reloaded, collection);
    }

    #[test]
    fn test_load_is_idempotent() {
        let (_dir, store) = temp_store();
        store.bootstrap().unwrap();

        let first = store.load().unwrap();
        let second = store.load().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_round_trip_preserves_order_and_content() {
        let (_dir, store) = temp_store();

        let mut collection = SessionCollection::default();
        for i in 0..3 {
            let mut session = Session::new();
            session.summary = format!("Session {}", i);
            session.messages.push(Message::user(format!("question {}", i)));
            session
                .messages
                .push(Message::assistant(format!("answer {}", i)));
            collection.sessions.push(session);
        }

        store.save(&collection).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.sessions.len(), 3);
        for (i, session) in loaded.sessions.iter().enumerate() {
            assert_eq!(session.summary, format!("Session {}", i));
            assert_eq!(session.messages.len(), 2);
            assert_eq!(session.messages[0].content, format!("question {}", i));
        }
        assert_eq!(loaded, collection);
    }

    #[test]
    fn test_load_missing_file_initializes_empty() {
        let (_dir, store) = temp_store();
        let collection = store.load().unwrap();
        assert!(collection.sessions.is_empty());
        assert!(store.path().exists());
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let (_dir, store) = temp_store();
        std::fs::write(store.path(), "not json").unwrap();
        let err = store.load().unwrap_err();
        assert!(matches!(err, PratError::Storage(_)));
    }
}
