//! Agent team for podcast content creation.
//!
//! A routing team lead classifies each inquiry and hands it to one member
//! agent (topic strategist, script writer, caption writer). Member responses
//! arrive as a forward-only fragment stream that is folded into one string
//! and stripped of reasoning sections before display or persistence.

mod summarizer;
mod team;

pub use summarizer::OpenAiSummarizer;
pub use team::AgentTeam;

use crate::error::Result;
use crate::session::Message;
use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::StreamExt;
use regex::Regex;

/// One incremental unit of a streamed agent response.
#[derive(Debug, Clone)]
pub struct Fragment {
    /// Text carried by this fragment, if any.
    pub content: Option<String>,
}

/// A live, single-pass stream of response fragments. Not restartable;
/// terminates when the agent signals completion or errors.
pub type FragmentStream = BoxStream<'static, Result<Fragment>>;

/// The conversational collaborator the chat loop talks to once per turn.
#[async_trait]
pub trait Collaborator: Send + Sync {
    /// Issue one conversational request and return the response stream.
    ///
    /// `history` is the active session's persisted message list, which
    /// doubles as the team's conversation memory.
    async fn run(&self, prompt: &str, history: &[Message], session_id: &str)
        -> Result<FragmentStream>;
}

/// One-shot session summarizer.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize the first line of a session's first assistant reply into a
    /// short display label (5 words or fewer).
    async fn summarize(&self, first_line: &str) -> Result<String>;
}

/// Fold a fragment stream into the accumulated response text.
///
/// Fragments are concatenated in arrival order. Termination without an error
/// is success; a mid-stream error fails the whole turn and no partial text is
/// returned.
pub async fn accumulate(mut stream: FragmentStream) -> Result<String> {
    let mut full_text = String::new();
    while let Some(fragment) = stream.next().await {
        if let Some(content) = fragment?.content {
            full_text.push_str(&content);
        }
    }
    Ok(full_text)
}

/// Remove reasoning/scratch sections (`<think>...</think>`) from model output.
///
/// Applied to the accumulated string before it is shown or persisted.
pub fn strip_reasoning(text: &str) -> String {
    let re = Regex::new(r"(?s)<think>.*?</think>").expect("Failed to compile reasoning filter");
    re.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PratError;
    use futures::stream;

    fn fragments(parts: &[&str]) -> FragmentStream {
        let items: Vec<Result<Fragment>> = parts
            .iter()
            .map(|p| {
                Ok(Fragment {
                    content: Some(p.to_string()),
                })
            })
            .collect();
        stream::iter(items).boxed()
    }

    #[tokio::test]
    async fn test_accumulate_concatenates_in_arrival_order() {
        let stream = fragments(&["## Topic 1", ": AI at the edge", "\nMore"]);
        let text = accumulate(stream).await.unwrap();
        assert_eq!(text, "## Topic 1: AI at the edge\nMore");
    }

    #[tokio::test]
    async fn test_accumulate_skips_empty_fragments() {
        let items: Vec<Result<Fragment>> = vec![
            Ok(Fragment {
                content: Some("a".to_string()),
            }),
            Ok(Fragment { content: None }),
            Ok(Fragment {
                content: Some("b".to_string()),
            }),
        ];
        let text = accumulate(stream::iter(items).boxed()).await.unwrap();
        assert_eq!(text, "ab");
    }

    #[tokio::test]
    async fn test_accumulate_fails_on_mid_stream_error() {
        let items: Vec<Result<Fragment>> = vec![
            Ok(Fragment {
                content: Some("partial".to_string()),
            }),
            Err(PratError::Stream("connection reset".to_string())),
        ];
        let err = accumulate(stream::iter(items).boxed()).await.unwrap_err();
        assert!(matches!(err, PratError::Stream(_)));
    }

    #[test]
    fn test_strip_reasoning_removes_delimited_sections() {
        let text = "<think>routing to strategist\nbecause...</think>## Topic 1";
        assert_eq!(strip_reasoning(text), "## Topic 1");
    }

    #[test]
    fn test_strip_reasoning_handles_multiple_sections() {
        let text = "a<think>x</think>b<think>y\nz</think>c";
        assert_eq!(strip_reasoning(text), "abc");
    }

    #[test]
    fn test_strip_reasoning_leaves_plain_text_alone() {
        let text = "## Topic 1: AI at the edge";
        assert_eq!(strip_reasoning(text), text);
    }
}
