//! Sessions command - list persisted conversations.

use crate::cli::Output;
use crate::config::Settings;
use crate::error::Result;
use crate::session::SessionStore;

/// List all persisted sessions.
pub fn run_sessions(settings: Settings) -> Result<()> {
    let store = SessionStore::new(settings.conversations_path());
    let collection = store.load()?;

    if collection.sessions.is_empty() {
        Output::info("No sessions yet. Start one with 'prat chat'.");
        return Ok(());
    }

    Output::header("Sessions");
    for (i, session) in collection.sessions.iter().enumerate() {
        Output::session_item(&session.summary, session.messages.len(), i == 0);
    }
    println!();
    Output::kv("Session file", &store.path().display().to_string());

    Ok(())
}
