//! Configuration module for Prat.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{
    CaptionPrompts, Prompts, StrategistPrompts, SummaryPrompts, TeamPrompts, WriterPrompts,
};
pub use settings::{
    GeneralSettings, ModelSettings, PromptSettings, SessionSettings, Settings,
};
