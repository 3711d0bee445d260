//! Prat - Podcast Content Chat
//!
//! A local-first CLI chat tool for podcast content creation.
//!
//! The name "Prat" comes from the Norwegian/Scandinavian word for "chat."
//!
//! # Overview
//!
//! Prat allows you to:
//! - Brainstorm podcast topics with a trend-aware strategist agent
//! - Turn chosen topics into full episode scripts
//! - Draft social media captions for episodes
//! - Keep every conversation in named, persisted sessions
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration and prompt templates
//! - `session` - Conversation session persistence and routing
//! - `agent` - The routed agent team and streaming response assembly
//! - `openai` - Shared OpenAI client construction
//! - `cli` - Command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use prat::config::Settings;
//! use prat::session::{SessionContext, SessionStore};
//!
//! fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let store = SessionStore::new(settings.conversations_path());
//!
//!     // Load (or bootstrap) the persisted conversations
//!     let collection = store.bootstrap()?;
//!     let ctx = SessionContext::new(collection)?;
//!     println!("Active session: {}", ctx.summary_label());
//!
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod openai;
pub mod session;

pub use error::{PratError, Result};
