//! CLI output formatting utilities.

use crate::session::{Message, Role};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print a warning message.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    /// Print an error message.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    /// Print a header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a key-value pair.
    pub fn kv(key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print one session in the sidebar listing.
    pub fn session_item(label: &str, message_count: usize, active: bool) {
        let marker = if active {
            style("*").green().bold()
        } else {
            style("*").cyan()
        };
        let label = if active {
            style(label).bold()
        } else {
            style(label)
        };
        println!(
            "  {} {} {}",
            marker,
            label,
            style(format!("({} messages)", message_count)).dim()
        );
    }

    /// Print a replayed chat message with its role prefix.
    pub fn chat_message(message: &Message) {
        match message.role {
            Role::User => println!("{} {}", style("You:").green().bold(), message.content),
            Role::Assistant => println!("{} {}\n", style("Prat:").cyan().bold(), message.content),
        }
    }

    /// Create a spinner.
    pub fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}
