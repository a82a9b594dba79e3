//! Formatted fragment value object

use serde::{Deserialize, Serialize};

/// A string of markup intended for direct insertion into a page
///
/// Produced by [`MarkupFormatter`](super::MarkupFormatter); carries no
/// identity beyond the text itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormattedFragment(String);

impl FormattedFragment {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for FormattedFragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FormattedFragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
