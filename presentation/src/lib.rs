//! Presentation layer for dekho-pakistan
//!
//! This crate contains CLI definitions, output renderers,
//! progress reporters, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplCommand};
pub use cli::commands::{Cli, Command, OutputFormatArg};
pub use config::ReplConfig;
pub use output::console::ConsoleFormatter;
pub use output::terminal::fragment_to_terminal;
pub use progress::reporter::SpinnerProgress;
