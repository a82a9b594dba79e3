//! Presentation-level configuration
//!
//! Configuration for REPL behavior.

use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show progress indicators
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// History file to use, falling back to the per-user data directory
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("dekho-pakistan").join("history.txt")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_history_file_wins() {
        let config = ReplConfig {
            show_progress: false,
            history_file: Some(PathBuf::from("/tmp/dekho-history")),
        };
        assert_eq!(
            config.history_path(),
            Some(PathBuf::from("/tmp/dekho-history"))
        );
    }

    #[test]
    fn test_default_shows_progress() {
        assert!(ReplConfig::default().show_progress);
    }
}
