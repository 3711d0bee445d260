//! One-shot session relabeling.
//!
//! A session keeps the sentinel label until its first assistant turn, at
//! which point the first line of the reply is condensed into a short display
//! label. Failures leave the sentinel in place so a later turn can retry;
//! the user never sees a summarization error.

use super::{SessionContext, SessionStore};
use crate::agent::Summarizer;
use crate::error::Result;
use tracing::{debug, warn};

/// Relabels sessions after their first assistant reply.
pub struct SummaryUpdater;

impl SummaryUpdater {
    /// Summarize the active session if it is still unlabeled.
    ///
    /// Returns `Ok(true)` when the label was updated and persisted,
    /// `Ok(false)` when the session was not eligible or summarization
    /// produced nothing usable.
    pub async fn maybe_summarize(
        ctx: &mut SessionContext,
        latest_assistant_text: &str,
        summarizer: &dyn Summarizer,
        store: &SessionStore,
    ) -> Result<bool> {
        if !ctx.active().is_unlabeled() {
            return Ok(false);
        }

        let first_line = latest_assistant_text.lines().next().unwrap_or("").trim();
        if first_line.is_empty() {
            debug!("Skipping summary: first assistant line is empty");
            return Ok(false);
        }

        let label = match summarizer.summarize(first_line).await {
            Ok(label) => label,
            Err(e) => {
                // Left eligible for the next turn.
                warn!("Session summarization failed: {}", e);
                return Ok(false);
            }
        };

        let label = label.trim();
        if label.is_empty() {
            warn!("Summarizer returned empty text, keeping sentinel label");
            return Ok(false);
        }

        debug!("Relabeling session {} as {:?}", ctx.active_id(), label);
        ctx.set_active_summary(label, store)?;
        Ok(true)
    }
}
