//! CLI module for Prat.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Prat - Podcast Content Chat
///
/// A local-first CLI chat tool for podcast content creation.
/// The name "Prat" comes from the Norwegian/Scandinavian word for "chat."
#[derive(Parser, Debug)]
#[command(name = "prat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize Prat and verify system requirements
    Init,

    /// Check system requirements and configuration
    Doctor,

    /// Start an interactive chat session with the podcast agent team
    Chat {
        /// Start in a fresh session instead of the most recent one
        #[arg(short, long)]
        new: bool,
    },

    /// List persisted conversation sessions
    Sessions,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
