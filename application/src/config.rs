//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as whether answer text is escaped before markup is applied.

use dekho_domain::EscapePolicy;

/// Application behavior configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct BehaviorConfig {
    /// Escaping applied to backend text before it becomes markup.
    pub escape_policy: EscapePolicy,
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig from the `escape_html` setting.
    pub fn from_escape_flag(escape_html: bool) -> Self {
        Self {
            escape_policy: EscapePolicy::from_flag(escape_html),
        }
    }
}
