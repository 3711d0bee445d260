//! Routing team of podcast agents.
//!
//! One conversational request per user turn: the team lead classifies the
//! inquiry, then the chosen member answers through a streamed chat
//! completion carrying the session history.

use super::{Collaborator, Fragment, FragmentStream};
use crate::config::{ModelSettings, Prompts};
use crate::error::{PratError, Result};
use crate::openai::create_client;
use crate::session::{Message, Role};
use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use futures::StreamExt;
use tracing::{debug, info};

/// Which member agent handles a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TeamRoute {
    Strategist,
    Writer,
    Caption,
}

/// Podcast agent team in routing mode.
pub struct AgentTeam {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    models: ModelSettings,
    prompts: Prompts,
}

impl AgentTeam {
    /// Create a team from model settings and prompt templates.
    pub fn new(models: ModelSettings, prompts: Prompts) -> Self {
        Self {
            client: create_client(),
            models,
            prompts,
        }
    }

    /// Classify the inquiry and pick the member agent.
    async fn route(&self, prompt: &str, history: &[Message]) -> Result<TeamRoute> {
        let mut messages = vec![system_message(&self.prompts.team.system)?];
        messages.extend(history_messages(history)?);
        messages.push(user_message(prompt)?);

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.models.router)
            .messages(messages)
            .build()
            .map_err(|e| PratError::Agent(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| PratError::OpenAI(format!("Routing call failed: {}", e)))?;

        let decision = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .unwrap_or("")
            .to_lowercase();

        let route = if decision.contains("caption") {
            TeamRoute::Caption
        } else if decision.contains("writer") || decision.contains("script") {
            TeamRoute::Writer
        } else {
            // Topic suggestions are the common case; unparseable routing
            // decisions fall back to the strategist.
            TeamRoute::Strategist
        };

        debug!("Routed inquiry to {:?} ({:?})", route, decision);
        Ok(route)
    }

    /// System prompt and model id for a member agent.
    fn member(&self, route: TeamRoute) -> (&str, &str) {
        match route {
            TeamRoute::Strategist => (&self.prompts.strategist.system, &self.models.strategist),
            TeamRoute::Writer => (&self.prompts.writer.system, &self.models.writer),
            TeamRoute::Caption => (&self.prompts.caption.system, &self.models.caption),
        }
    }
}

#[async_trait]
impl Collaborator for AgentTeam {
    async fn run(
        &self,
        prompt: &str,
        history: &[Message],
        session_id: &str,
    ) -> Result<FragmentStream> {
        info!(
            "Team turn for session {} ({} prior messages)",
            session_id,
            history.len()
        );

        let route = self.route(prompt, history).await?;
        let (system, model) = self.member(route);

        let mut messages = vec![system_message(system)?];
        messages.extend(history_messages(history)?);
        messages.push(user_message(prompt)?);

        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .temperature(self.models.temperature)
            .build()
            .map_err(|e| PratError::Agent(e.to_string()))?;

        let stream = self
            .client
            .chat()
            .create_stream(request)
            .await
            .map_err(|e| PratError::OpenAI(format!("Member call failed: {}", e)))?;

        let fragments = stream
            .map(|item| match item {
                Ok(response) => Ok(Fragment {
                    content: response
                        .choices
                        .first()
                        .and_then(|c| c.delta.content.clone()),
                }),
                Err(e) => Err(PratError::Stream(e.to_string())),
            })
            .boxed();

        Ok(fragments)
    }
}

/// Build a system message for a chat completion request.
fn system_message(content: &str) -> Result<ChatCompletionRequestMessage> {
    Ok(ChatCompletionRequestSystemMessageArgs::default()
        .content(content)
        .build()
        .map_err(|e| PratError::Agent(e.to_string()))?
        .into())
}

/// Build a user message for a chat completion request.
fn user_message(content: &str) -> Result<ChatCompletionRequestMessage> {
    Ok(ChatCompletionRequestUserMessageArgs::default()
        .content(content)
        .build()
        .map_err(|e| PratError::Agent(e.to_string()))?
        .into())
}

/// Convert persisted session messages into request messages.
fn history_messages(history: &[Message]) -> Result<Vec<ChatCompletionRequestMessage>> {
    history
        .iter()
        .map(|message| match message.role {
            Role::User => user_message(&message.content),
            Role::Assistant => Ok(ChatCompletionRequestAssistantMessageArgs::default()
                .content(message.content.clone())
                .build()
                .map_err(|e| PratError::Agent(e.to_string()))?
                .into()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_messages_preserve_count_and_order() {
        let history = vec![
            Message::user("Suggest 5 podcast topics about tech trends."),
            Message::assistant("## Topic 1: AI at the edge"),
            Message::user("Write a script for the 1st topic."),
        ];

        let messages = history_messages(&history).unwrap();
        assert_eq!(messages.len(), 3);
        assert!(matches!(
            messages[0],
            ChatCompletionRequestMessage::User(_)
        ));
        assert!(matches!(
            messages[1],
            ChatCompletionRequestMessage::Assistant(_)
        ));
        assert!(matches!(
            messages[2],
            ChatCompletionRequestMessage::User(_)
        ));
    }
}
