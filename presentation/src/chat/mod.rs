//! Interactive chat module
//!
//! Provides a readline-based interactive session with the travel assistant.

mod repl;

pub use repl::{ChatRepl, ReplCommand};
