//! One-shot streamed session summarizer.

use super::{accumulate, Fragment, Summarizer};
use crate::config::Prompts;
use crate::error::{PratError, Result};
use crate::openai::create_client;
use async_openai::types::{
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use futures::StreamExt;
use std::collections::HashMap;
use tracing::debug;

/// Summarizer backed by a streamed chat completion.
pub struct OpenAiSummarizer {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    prompts: Prompts,
}

impl OpenAiSummarizer {
    /// Create a summarizer for the given model.
    pub fn new(model: &str, prompts: Prompts) -> Self {
        Self {
            client: create_client(),
            model: model.to_string(),
            prompts,
        }
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, first_line: &str) -> Result<String> {
        let mut vars = HashMap::new();
        vars.insert("line".to_string(), first_line.to_string());
        let user_prompt = self
            .prompts
            .render_with_custom(&self.prompts.summary.user, &vars);

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(self.prompts.summary.system.clone())
                    .build()
                    .map_err(|e| PratError::Summarization(e.to_string()))?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user_prompt)
                    .build()
                    .map_err(|e| PratError::Summarization(e.to_string()))?
                    .into(),
            ])
            .build()
            .map_err(|e| PratError::Summarization(e.to_string()))?;

        let stream = self
            .client
            .chat()
            .create_stream(request)
            .await
            .map_err(|e| PratError::Summarization(e.to_string()))?;

        let fragments = stream
            .map(|item| match item {
                Ok(response) => Ok(Fragment {
                    content: response
                        .choices
                        .first()
                        .and_then(|c| c.delta.content.clone()),
                }),
                Err(e) => Err(PratError::Summarization(e.to_string())),
            })
            .boxed();

        let label = accumulate(fragments).await?;

        debug!("Summarized {:?} as {:?}", first_line, label);
        Ok(label.trim().to_string())
    }
}
