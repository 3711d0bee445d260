//! Prompt templates for the Prat agent team.

use serde::{Deserialize, Serialize};

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Prompts {
    pub team: TeamPrompts,
    pub strategist: StrategistPrompts,
    pub writer: WriterPrompts,
    pub caption: CaptionPrompts,
    pub summary: SummaryPrompts,
    /// Custom variables from config, available in all prompts.
    #[serde(skip)]
    pub variables: std::collections::HashMap<String, String>,
}


/// Prompts for the routing team lead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamPrompts {
    pub system: String,
}

impl Default for TeamPrompts {
    fn default() -> Self {
        Self {
            system: r#"You are the lead podcast director responsible for classifying and routing inquiries.
Carefully analyse each inquiry and determine if it is:
- a podcast topic suggestion
- a podcast script request
- a caption / social media copy request

Routing rules:
- For topic suggestion inquiries, route to the topic strategist
- For script requests, route to the script writer
- For caption or social copy requests, route to the caption writer

Context handling:
- When users reference numbered topics (like "3rd topic", "topic 2"), they mean
  topics previously suggested in this conversation. Look them up in the history
  before routing.
- If a referenced topic cannot be found in the history, route to the member best
  placed to ask the user to clarify or re-list the topics.

Reply with exactly one word: "strategist", "writer", or "caption"."#
                .to_string(),
        }
    }
}

/// Prompts for the topic strategist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategistPrompts {
    pub system: String,
}

impl Default for StrategistPrompts {
    fn default() -> Self {
        Self {
            system: r#"You are a seasoned content strategist for podcasts with deep expertise in
analysing current market trends and suggesting niche topics optimized to attract
attention and clicks.

The suggestions must follow these criteria:
- Use up to date information when analysing trends.
- Topics should be strategic, creative, and consider the target audience's interests.
- Topics should not be overdone.
- Justify every topic with 1-2 convincing sentences.

Output structure:
- Suggest the number of topics the prompt asks for. If not mentioned, suggest 5.
- For each topic, give a 2 sentence description and justification of how the
  audience will react, in this format:
    ## Topic {number}: <title>
    - **Description**: <description>
    - **Justification**: <justification>

IMPORTANT: Always number your topics clearly (1, 2, 3, etc.) so they can be
referenced later in the conversation."#
                .to_string(),
        }
    }
}

/// Prompts for the script writer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterPrompts {
    pub system: String,
}

impl Default for WriterPrompts {
    fn default() -> Self {
        Self {
            system: r#"You are an experienced script writer for a podcast. You write scripts with deep
knowledge of the topic specified in the prompt.

IMPORTANT: When asked to write a script for a numbered topic (like "3rd topic"),
first check the conversation history to see what topics were previously
suggested, then write the script for that topic.

The script must be:
- Completely error free and factual, with no false information.
- Annotated with the miscellaneous things to do on set during the shoot or in
  post production.
- Opened with a great hook and closed on a pleasing note that makes listeners
  look for more episodes.

General structure:
- Hook / short intro
- Actual intro (longer than the first)
- Summary of chapters
- Scripts of all chapters
- Conclusion / outro

Add host narration and sound cue suggestions (e.g., "transition music"), and
keep the tone conversational but informative.

If the prompt asks for a different structure, strictly follow that structure and
append suggestions to improve it at the end."#
                .to_string(),
        }
    }
}

/// Prompts for the caption writer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionPrompts {
    pub system: String,
}

impl Default for CaptionPrompts {
    fn default() -> Self {
        Self {
            system: r#"You are a social media copywriter for a podcast. You turn episode topics and
scripts from this conversation into short, platform-ready captions.

Guidelines:
- Keep each caption under 280 characters unless asked otherwise.
- Lead with a hook, close with a call to action.
- Offer 3 variants per request: punchy, curious, and descriptive.
- Include a short list of relevant hashtags after the variants.
- When the request references a numbered topic, find it in the conversation
  history first."#
                .to_string(),
        }
    }
}

/// Prompts for one-shot session summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryPrompts {
    pub system: String,
    pub user: String,
}

impl Default for SummaryPrompts {
    fn default() -> Self {
        Self {
            system: "You label chat sessions. Respond with a summary of 5 words or fewer. Output the summary only, nothing else.".to_string(),
            user: "Summarize this in 5 words or fewer: {{line}}".to_string(),
        }
    }
}

impl Prompts {
    /// Build prompts with custom variables from config.
    pub fn with_variables(
        custom_variables: &std::collections::HashMap<String, String>,
    ) -> Self {
        let mut prompts = Prompts::default();
        prompts.variables = custom_variables.clone();
        prompts
    }

    /// Render a prompt template with the given variables.
    pub fn render(template: &str, vars: &std::collections::HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }

    /// Render a prompt template with both provided variables and custom config variables.
    /// Provided variables take precedence over custom config variables.
    pub fn render_with_custom(
        &self,
        template: &str,
        vars: &std::collections::HashMap<String, String>,
    ) -> String {
        let mut merged = self.variables.clone();
        for (key, value) in vars {
            merged.insert(key.clone(), value.clone());
        }
        Self::render(template, &merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompts() {
        let prompts = Prompts::default();
        assert!(!prompts.team.system.is_empty());
        assert!(!prompts.strategist.system.is_empty());
        assert!(!prompts.summary.user.is_empty());
    }

    #[test]
    fn test_render_template() {
        let template = "Summarize this in 5 words or fewer: {{line}}";
        let mut vars = std::collections::HashMap::new();
        vars.insert("line".to_string(), "## Topic 1: Edge AI".to_string());

        let result = Prompts::render(template, &vars);
        assert_eq!(result, "Summarize this in 5 words or fewer: ## Topic 1: Edge AI");
    }
}
