//! Error types for Prat.

use thiserror::Error;

/// Library-level error type for Prat operations.
#[derive(Error, Debug)]
pub enum PratError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session storage unavailable: {0}")]
    Storage(String),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Response stream failed: {0}")]
    Stream(String),

    #[error("Summarization failed: {0}")]
    Summarization(String),

    #[error("Agent error: {0}")]
    Agent(String),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Prat operations.
pub type Result<T> = std::result::Result<T, PratError>;
