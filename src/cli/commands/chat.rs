//! Interactive chat command driving the podcast agent team.

use crate::agent::{accumulate, strip_reasoning, AgentTeam, Collaborator, OpenAiSummarizer, Summarizer};
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::{Prompts, Settings};
use crate::error::{PratError, Result};
use crate::session::{SessionContext, SessionStore, SummaryUpdater};
use console::style;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run the interactive chat command.
pub async fn run_chat(new_session: bool, settings: Settings) -> Result<()> {
    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::Chat, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'prat doctor' for detailed diagnostics.");
        return Err(e);
    }

    let store = SessionStore::new(settings.conversations_path());
    let collection = store.bootstrap()?;
    let mut ctx = SessionContext::new(collection)?;

    if new_session {
        ctx.create_new(&store)?;
    }

    let prompts = Prompts::with_variables(&settings.prompts.variables);
    let team = AgentTeam::new(settings.model.clone(), prompts.clone());
    let summarizer = OpenAiSummarizer::new(&settings.model.summary, prompts);

    println!("\n{}", style("Prat").bold().cyan());
    println!(
        "{}\n",
        style("Enter a podcast idea, or 'exit' to quit. Commands: 'new', 'switch <session>', 'sessions'.")
            .dim()
    );

    render_sidebar(&ctx);
    render_history(&ctx);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", style("You:").green().bold());
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break; // EOF
        }

        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            Output::info("Goodbye!");
            break;
        }

        if input.eq_ignore_ascii_case("new") {
            ctx.create_new(&store)?;
            Output::info("Started a new session.");
            continue;
        }

        if input.eq_ignore_ascii_case("sessions") {
            render_sidebar(&ctx);
            continue;
        }

        if let Some(label) = input.strip_prefix("switch ") {
            match ctx.switch_to_label(label.trim()) {
                Ok(()) => {
                    Output::info(&format!("Switched to '{}'.", ctx.summary_label()));
                    render_history(&ctx);
                }
                Err(PratError::SessionNotFound(label)) => {
                    Output::error(&format!("No session named '{}'.", label));
                    render_sidebar(&ctx);
                }
                Err(e) => return Err(e),
            }
            continue;
        }

        run_turn(input, &mut ctx, &store, &team, &summarizer).await?;
    }

    Ok(())
}

/// Process one user turn: append, stream, filter, append, maybe summarize.
async fn run_turn(
    prompt: &str,
    ctx: &mut SessionContext,
    store: &SessionStore,
    team: &dyn Collaborator,
    summarizer: &dyn Summarizer,
) -> Result<()> {
    // History for the team is the conversation as it stood before this turn.
    let history = ctx.mirror().to_vec();

    // The user message lands in mirror and disk before the response is
    // attempted; if the stream fails it stays persisted as-is.
    ctx.append_user(prompt, store)?;

    let spinner = Output::spinner("Thinking...");

    let outcome = match team.run(prompt, &history, ctx.active_id()).await {
        Ok(stream) => accumulate(stream).await,
        Err(e) => Err(e),
    };

    spinner.finish_and_clear();

    let full_text = match outcome {
        Ok(text) => text,
        Err(e) => {
            // Turn aborted: no assistant message is appended.
            debug!("Turn failed for session {}: {}", ctx.active_id(), e);
            Output::error(&format!("The response failed: {}", e));
            Output::info("Your message was saved; try again to continue the conversation.");
            return Ok(());
        }
    };

    let filtered = strip_reasoning(&full_text).trim().to_string();
    println!("\n{} {}\n", style("Prat:").cyan().bold(), filtered);

    ctx.append_assistant(&filtered, store)?;

    SummaryUpdater::maybe_summarize(ctx, &filtered, summarizer, store).await?;

    Ok(())
}

/// List all sessions with the active one marked.
fn render_sidebar(ctx: &SessionContext) {
    Output::header("Sessions");
    for session in ctx.sessions() {
        Output::session_item(
            &session.summary,
            session.messages.len(),
            session.session_id == ctx.active_id(),
        );
    }
    println!();
}

/// Replay the active session's persisted messages.
fn render_history(ctx: &SessionContext) {
    for message in ctx.mirror() {
        Output::chat_message(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{Fragment, FragmentStream};
    use crate::session::{Role, SENTINEL_SUMMARY};
    use async_trait::async_trait;
    use futures::stream;
    use futures::StreamExt;

    /// Collaborator that replays a fixed fragment sequence.
    struct StubTeam {
        fragments: Vec<Result<Fragment>>,
    }

    impl StubTeam {
        fn streaming(parts: &[&str]) -> Self {
            Self {
                fragments: parts
                    .iter()
                    .map(|p| {
                        Ok(Fragment {
                            content: Some(p.to_string()),
                        })
                    })
                    .collect(),
            }
        }

        fn failing_after(parts: &[&str]) -> Self {
            let mut fragments: Vec<Result<Fragment>> = parts
                .iter()
                .map(|p| {
                    Ok(Fragment {
                        content: Some(p.to_string()),
                    })
                })
                .collect();
            fragments.push(Err(PratError::Stream("connection reset".to_string())));
            Self { fragments }
        }
    }

    #[async_trait]
    impl Collaborator for StubTeam {
        async fn run(
            &self,
            _prompt: &str,
            _history: &[crate::session::Message],
            _session_id: &str,
        ) -> Result<FragmentStream> {
            let items: Vec<Result<Fragment>> = self
                .fragments
                .iter()
                .map(|f| match f {
                    Ok(fragment) => Ok(fragment.clone()),
                    Err(e) => Err(PratError::Stream(e.to_string())),
                })
                .collect();
            Ok(stream::iter(items).boxed())
        }
    }

    struct StubSummarizer(&'static str);

    #[async_trait]
    impl Summarizer for StubSummarizer {
        async fn summarize(&self, _first_line: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    fn fixture() -> (tempfile::TempDir, SessionStore, SessionContext) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("conversations.json"));
        let collection = store.bootstrap().unwrap();
        let ctx = SessionContext::new(collection).unwrap();
        (dir, store, ctx)
    }

    #[tokio::test]
    async fn test_turn_accumulates_filters_and_summarizes() {
        let (_dir, store, mut ctx) = fixture();
        let team = StubTeam::streaming(&[
            "<think>topic request,",
            " routing to strategist</think>",
            "## Topic 1",
            ": AI at the edge",
        ]);
        let summarizer = StubSummarizer("Edge AI topics");

        run_turn(
            "Suggest 5 podcast topics about tech trends.",
            &mut ctx,
            &store,
            &team,
            &summarizer,
        )
        .await
        .unwrap();

        // One user + one assistant message, reasoning stripped, in both the
        // mirror and the persisted session.
        let persisted = store.load().unwrap();
        let session = persisted.get(ctx.active_id()).unwrap();
        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.messages[0].role, Role::User);
        assert_eq!(session.messages[1].role, Role::Assistant);
        assert_eq!(session.messages[1].content, "## Topic 1: AI at the edge");
        assert_eq!(ctx.mirror(), session.messages.as_slice());

        // Summary transitioned from the sentinel.
        assert_eq!(session.summary, "Edge AI topics");
        assert_eq!(ctx.summary_label(), "Edge AI topics");
    }

    #[tokio::test]
    async fn test_failed_stream_keeps_user_message_only() {
        let (_dir, store, mut ctx) = fixture();
        let team = StubTeam::failing_after(&["partial output"]);
        let summarizer = StubSummarizer("Should Not Apply");

        run_turn("hello?", &mut ctx, &store, &team, &summarizer)
            .await
            .unwrap();

        let persisted = store.load().unwrap();
        let session = persisted.get(ctx.active_id()).unwrap();
        assert_eq!(session.messages.len(), 1);
        assert_eq!(session.messages[0].role, Role::User);
        // No summary was attempted for the failed turn.
        assert_eq!(session.summary, SENTINEL_SUMMARY);
    }

    #[tokio::test]
    async fn test_second_turn_does_not_relabel() {
        let (_dir, store, mut ctx) = fixture();
        let summarizer = StubSummarizer("First Label");

        run_turn(
            "Suggest topics.",
            &mut ctx,
            &store,
            &StubTeam::streaming(&["## Topic 1: Edge AI"]),
            &summarizer,
        )
        .await
        .unwrap();
        assert_eq!(ctx.summary_label(), "First Label");

        let second = StubSummarizer("Second Label");
        run_turn(
            "Write a script for the 1st topic.",
            &mut ctx,
            &store,
            &StubTeam::streaming(&["Hook: ..."]),
            &second,
        )
        .await
        .unwrap();

        // Summarization runs at most once per session.
        assert_eq!(ctx.summary_label(), "First Label");
        let persisted = store.load().unwrap();
        assert_eq!(persisted.sessions[0].summary, "First Label");
        assert_eq!(persisted.sessions[0].messages.len(), 4);
    }
}
