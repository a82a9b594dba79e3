//! HTML escaping for untrusted answer text

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Whether literal text is escaped before markup is applied
///
/// `Preserve` reproduces the site exactly: answer text is injected as-is,
/// so any tags the backend emits are rendered. `Escape` hardens against
/// injection by escaping the text first; emphasis markers still apply
/// because escaping never touches `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscapePolicy {
    #[default]
    Preserve,
    Escape,
}

impl EscapePolicy {
    /// Map a boolean `escape_html` setting onto a policy
    pub fn from_flag(escape: bool) -> Self {
        if escape { Self::Escape } else { Self::Preserve }
    }

    /// Apply the policy to a piece of literal text
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            Self::Preserve => Cow::Borrowed(text),
            Self::Escape => Cow::Owned(escape_html(text)),
        }
    }
}

/// Escape HTML special characters
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_leaves_asterisks() {
        assert_eq!(escape_html("**bold** *"), "**bold** *");
    }

    #[test]
    fn test_preserve_borrows() {
        let text = "<b>raw</b>";
        assert!(matches!(EscapePolicy::Preserve.apply(text), Cow::Borrowed(_)));
        assert_eq!(EscapePolicy::Preserve.apply(text), "<b>raw</b>");
    }

    #[test]
    fn test_from_flag() {
        assert_eq!(EscapePolicy::from_flag(true), EscapePolicy::Escape);
        assert_eq!(EscapePolicy::from_flag(false), EscapePolicy::Preserve);
        assert_eq!(EscapePolicy::default(), EscapePolicy::Preserve);
    }
}
