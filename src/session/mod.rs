//! Conversation session persistence for Prat.
//!
//! Sessions are stored as a single JSON document holding every conversation
//! thread. The on-disk shape is
//! `{"sessions": [{"session_id", "summary", "messages": [{"role", "content"}]}]}`
//! so other tools reading the same file keep working.

mod context;
mod store;
mod summary;

pub use context::SessionContext;
pub use store::SessionStore;
pub use summary::SummaryUpdater;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder label for sessions that have not been auto-summarized yet.
pub const SENTINEL_SUMMARY: &str = "New Session";

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One chat message. Immutable once appended; order is chronological.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// One persisted conversation thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque unique token identifying this session.
    pub session_id: String,
    /// Display label; starts as [`SENTINEL_SUMMARY`] until auto-summarized.
    pub summary: String,
    /// Ordered message history, append-only.
    pub messages: Vec<Message>,
}

impl Session {
    /// Create a fresh session with a new id, sentinel summary, and no messages.
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            summary: SENTINEL_SUMMARY.to_string(),
            messages: Vec::new(),
        }
    }

    /// Whether this session still carries the placeholder label.
    pub fn is_unlabeled(&self) -> bool {
        self.summary == SENTINEL_SUMMARY
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// The top-level persisted structure: an ordered list of sessions.
///
/// Session ids are unique within the collection. New sessions are inserted
/// at the front so the most recent conversation lists first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCollection {
    pub sessions: Vec<Session>,
}

impl SessionCollection {
    /// Look up a session by id.
    pub fn get(&self, session_id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.session_id == session_id)
    }

    /// Look up a session by id, mutably.
    pub fn get_mut(&mut self, session_id: &str) -> Option<&mut Session> {
        self.sessions
            .iter_mut()
            .find(|s| s.session_id == session_id)
    }

    /// Resolve a display label to a session id (first match).
    ///
    /// Labels are a UI convenience; everything downstream routes by id, so
    /// colliding labels deterministically select the first session carrying
    /// the label.
    pub fn id_for_label(&self, label: &str) -> Option<&str> {
        self.sessions
            .iter()
            .find(|s| s.summary == label)
            .map(|s| s.session_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_unlabeled() {
        let session = Session::new();
        assert!(session.is_unlabeled());
        assert!(session.messages.is_empty());
        assert!(!session.session_id.is_empty());
    }

    #[test]
    fn test_session_ids_unique() {
        let a = Session::new();
        let b = Session::new();
        assert_ne!(a.session_id, b.session_id);
    }

    #[test]
    fn test_wire_format() {
        let mut session = Session::new();
        session.session_id = "42".to_string();
        session.messages.push(Message::user("hi"));
        session.messages.push(Message::assistant("hello"));
        let collection = SessionCollection {
            sessions: vec![session],
        };

        let json = serde_json::to_value(&collection).unwrap();
        assert_eq!(json["sessions"][0]["session_id"], "42");
        assert_eq!(json["sessions"][0]["summary"], SENTINEL_SUMMARY);
        assert_eq!(json["sessions"][0]["messages"][0]["role"], "user");
        assert_eq!(json["sessions"][0]["messages"][1]["role"], "assistant");
        assert_eq!(json["sessions"][0]["messages"][1]["content"], "hello");
    }

    #[test]
    fn test_id_for_label_first_match() {
        let mut first = Session::new();
        first.summary = "Tech trends".to_string();
        let mut second = Session::new();
        second.summary = "Tech trends".to_string();
        let first_id = first.session_id.clone();

        let collection = SessionCollection {
            sessions: vec![first, second],
        };

        assert_eq!(collection.id_for_label("Tech trends"), Some(first_id.as_str()));
        assert_eq!(collection.id_for_label("missing"), None);
    }
}
