//! CLI command implementations.

mod chat;
mod config;
mod doctor;
mod init;
mod sessions;

pub use chat::run_chat;
pub use config::run_config;
pub use doctor::run_doctor;
pub use init::run_init;
pub use sessions::run_sessions;
