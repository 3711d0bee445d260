//! Active-session routing and message appending.
//!
//! `SessionContext` is the UI-layer state passed through the chat loop: the
//! full collection, the id of the active session, and a transient mirror of
//! that session's messages and label. Lookups are keyed by session id;
//! display labels are resolved to ids before dispatch.

use super::{Message, Session, SessionCollection, SessionStore, SENTINEL_SUMMARY};
use crate::error::{PratError, Result};
use tracing::debug;

/// Chat-loop state: collection, active session id, and the transient mirror.
pub struct SessionContext {
    collection: SessionCollection,
    active_id: String,
    mirror: Vec<Message>,
    summary: String,
}

impl SessionContext {
    /// Build a context from a loaded collection.
    ///
    /// The first session in the collection becomes active. The collection
    /// must be non-empty; `SessionStore::bootstrap` guarantees that.
    pub fn new(collection: SessionCollection) -> Result<Self> {
        let first = collection
            .sessions
            .first()
            .ok_or_else(|| PratError::Storage("empty session collection".to_string()))?;

        let active_id = first.session_id.clone();
        let mirror = first.messages.clone();
        let summary = first.summary.clone();

        Ok(Self {
            collection,
            active_id,
            mirror,
            summary,
        })
    }

    /// The currently active session.
    pub fn active(&self) -> &Session {
        self.collection
            .get(&self.active_id)
            .expect("active session must exist in the collection")
    }

    /// Id of the currently active session.
    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    /// Transient mirror of the active session's messages.
    pub fn mirror(&self) -> &[Message] {
        &self.mirror
    }

    /// Transient mirror of the active session's display label.
    pub fn summary_label(&self) -> &str {
        &self.summary
    }

    /// Read-only view of every session, in collection order.
    pub fn sessions(&self) -> &[Session] {
        &self.collection.sessions
    }

    /// Switch to the session the user selected by display label.
    ///
    /// The label is mapped to the id of the first session carrying it, then
    /// dispatched by id. An unknown label fails with `SessionNotFound` and
    /// leaves the active session unchanged.
    pub fn switch_to_label(&mut self, label: &str) -> Result<()> {
        let id = self
            .collection
            .id_for_label(label)
            .ok_or_else(|| PratError::SessionNotFound(label.to_string()))?
            .to_string();
        self.switch_to_id(&id)
    }

    /// Switch to a session by id, replacing the transient mirror with its
    /// persisted messages.
    pub fn switch_to_id(&mut self, session_id: &str) -> Result<()> {
        let session = self
            .collection
            .get(session_id)
            .ok_or_else(|| PratError::SessionNotFound(session_id.to_string()))?;

        self.mirror = session.messages.clone();
        self.summary = session.summary.clone();
        self.active_id = session.session_id.clone();
        debug!("Switched to session {}", self.active_id);
        Ok(())
    }

    /// Create a fresh session, make it active, and persist immediately.
    ///
    /// The new session goes to the front of the collection so it lists first.
    pub fn create_new(&mut self, store: &SessionStore) -> Result<&Session> {
        let session = Session::new();
        debug!("Created session {}", session.session_id);

        self.active_id = session.session_id.clone();
        self.mirror.clear();
        self.summary = SENTINEL_SUMMARY.to_string();
        self.collection.sessions.insert(0, session);

        store.save(&self.collection)?;
        Ok(&self.collection.sessions[0])
    }

    /// Append a user message to the mirror, then the active session, then disk.
    ///
    /// Mirror first, so the UI reflects the message before persistence is
    /// attempted.
    pub fn append_user(&mut self, text: &str, store: &SessionStore) -> Result<()> {
        self.append(Message::user(text), store)
    }

    /// Append an assistant message the same way. `text` is the fully
    /// accumulated, filtered model output for the turn.
    pub fn append_assistant(&mut self, text: &str, store: &SessionStore) -> Result<()> {
        self.append(Message::assistant(text), store)
    }

    fn append(&mut self, message: Message, store: &SessionStore) -> Result<()> {
        self.mirror.push(message.clone());

        let active_id = self.active_id.clone();
        let session = self
            .collection
            .get_mut(&active_id)
            .ok_or_else(|| PratError::SessionNotFound(active_id.clone()))?;
        session.messages.push(message);

        store.save(&self.collection)
    }

    /// Relabel the active session and persist. Used by the summary updater.
    pub fn set_active_summary(&mut self, label: &str, store: &SessionStore) -> Result<()> {
        let active_id = self.active_id.clone();
        let session = self
            .collection
            .get_mut(&active_id)
            .ok_or_else(|| PratError::SessionNotFound(active_id.clone()))?;
        session.summary = label.to_string();
        self.summary = label.to_string();

        store.save(&self.collection)
    }
}
