//! Raw answer value object

use serde::{Deserialize, Serialize};

/// Plain-text answer from the backend, possibly carrying emphasis markers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAnswer(String);

impl RawAnswer {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Build an answer from a list of lines, joined the way a browser
    /// stringifies an array (comma separated, no spaces)
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let joined = lines
            .iter()
            .map(|l| l.as_ref())
            .collect::<Vec<&str>>()
            .join(",");
        Self(joined)
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

impl std::fmt::Display for RawAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RawAnswer {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RawAnswer {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines_joins_with_comma() {
        let answer = RawAnswer::from_lines(&["Visit Swat.", "Try the trout."]);
        assert_eq!(answer.as_str(), "Visit Swat.,Try the trout.");
    }

    #[test]
    fn test_from_lines_empty() {
        let lines: [&str; 0] = [];
        assert!(RawAnswer::from_lines(&lines).is_empty());
    }

    #[test]
    fn test_serde_transparent() {
        let answer: RawAnswer = serde_json::from_str("\"**hi**\"").unwrap();
        assert_eq!(answer, RawAnswer::from("**hi**"));
        assert_eq!(serde_json::to_string(&answer).unwrap(), "\"**hi**\"");
    }
}
