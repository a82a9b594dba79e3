//! Emphasis marker formatter
//!
//! Converts a backend answer into an HTML fragment with a pair of regex
//! passes. The rules are deliberately literal; output is not idempotent
//! because the bullet markup re-introduces `*`.
//!
//! # Styles
//!
//! | Style | `**X**` becomes | bare `*` becomes |
//! |-------|-----------------|------------------|
//! | [`MarkupStyle::Plan`] | line break, indent, `<span class="bold-orange">X<br></span>` | line break, deeper indent, `*` |
//! | [`MarkupStyle::Search`] | `<strong>X</strong>` | left alone |
//!
//! Pairing is non-greedy and never crosses a line terminator (`\n`, `\r`,
//! U+2028, U+2029), so `**a** and **b**` yields two independent spans. An unmatched `**` stays literal (and, under
//! the plan style, each of its asterisks becomes a bullet).

use super::escape::EscapePolicy;
use super::fragment::FormattedFragment;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// `**X**` where X stays on one line; `\r`, U+2028 and U+2029 end a line too
static STRONG_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*([^\n\r\x{2028}\x{2029}]*?)\*\*").expect("emphasis pattern is valid")
});

const PLAN_STRONG: &str = r#"<br>&nbsp;&nbsp;&nbsp;<span class="bold-orange">${1}<br></span>"#;
const PLAN_BULLET: &str = "<br>&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;*";
const SEARCH_STRONG: &str = "<strong>${1}</strong>";

/// Which set of emphasis rules to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupStyle {
    /// Tour plan rendering: highlighted headings plus bullet lines
    #[default]
    Plan,
    /// Search popup rendering: `<strong>` only
    Search,
}

/// Pure, stateless formatter for backend answers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkupFormatter {
    style: MarkupStyle,
    policy: EscapePolicy,
}

impl MarkupFormatter {
    pub fn new(style: MarkupStyle) -> Self {
        Self {
            style,
            policy: EscapePolicy::default(),
        }
    }

    /// Formatter for generated tour plans
    pub fn plan() -> Self {
        Self::new(MarkupStyle::Plan)
    }

    /// Formatter for travel-agent search answers
    pub fn search() -> Self {
        Self::new(MarkupStyle::Search)
    }

    pub fn with_policy(mut self, policy: EscapePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn style(&self) -> MarkupStyle {
        self.style
    }

    pub fn policy(&self) -> EscapePolicy {
        self.policy
    }

    /// Format a raw answer into a fragment
    pub fn format(&self, raw: &str) -> FormattedFragment {
        let text = self.policy.apply(raw);
        let formatted = match self.style {
            MarkupStyle::Plan => {
                // Bullets run second so the asterisks consumed by pairing are gone
                let paired = STRONG_PAIR.replace_all(&text, PLAN_STRONG);
                paired.replace('*', PLAN_BULLET)
            }
            MarkupStyle::Search => STRONG_PAIR.replace_all(&text, SEARCH_STRONG).into_owned(),
        };
        FormattedFragment::new(formatted)
    }
}

/// Wrap a plan fragment in the container the plan page renders it in
pub fn wrap_plan(fragment: &FormattedFragment) -> String {
    format!(r#"<div class="formatted-text">{}</div>"#, fragment)
}
