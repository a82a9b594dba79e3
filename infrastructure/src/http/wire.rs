//! JSON bodies exchanged with the backend
//!
//! Request bodies for hotels, plans and email are the domain types
//! themselves; only the shapes that differ from the domain live here.

use dekho_domain::{Hotel, RawAnswer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub(crate) struct QuestionBody<'a> {
    pub question: &'a str,
}

/// `answer` is a string for plans but a list of lines for searches
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnswerPayload {
    Text(String),
    Lines(Vec<String>),
    Other(Value),
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerBody {
    #[serde(default)]
    answer: Option<AnswerPayload>,
}

impl AnswerBody {
    /// Coerce the payload to text the way the page did
    ///
    /// Falsy values (`null`, `false`, `0`, `""`) become empty. Everything
    /// else is stringified, arrays item by item with `null` items empty.
    pub fn into_answer(self) -> RawAnswer {
        match self.answer {
            None => RawAnswer::default(),
            Some(AnswerPayload::Text(text)) => RawAnswer::new(text),
            Some(AnswerPayload::Lines(lines)) => RawAnswer::from_lines(&lines),
            Some(AnswerPayload::Other(value)) if is_truthy(&value) => {
                RawAnswer::new(coerce_to_text(&value))
            }
            Some(AnswerPayload::Other(_)) => RawAnswer::default(),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn coerce_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(coerce_to_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct HotelsBody {
    #[serde(default)]
    pub hotel_names: Vec<Hotel>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> RawAnswer {
        serde_json::from_str::<AnswerBody>(json)
            .unwrap()
            .into_answer()
    }

    #[test]
    fn test_answer_string() {
        assert_eq!(decode(r#"{"answer": "**Hunza**"}"#).as_str(), "**Hunza**");
    }

    #[test]
    fn test_answer_lines_joined_with_comma() {
        assert_eq!(
            decode(r#"{"answer": ["Visit Swat.", "", "Eat trout."]}"#).as_str(),
            "Visit Swat.,,Eat trout."
        );
    }

    #[test]
    fn test_answer_missing_or_null() {
        assert!(decode("{}").is_empty());
        assert!(decode(r#"{"answer": null}"#).is_empty());
    }

    #[test]
    fn test_answer_other_value_stringified() {
        assert_eq!(decode(r#"{"answer": 42}"#).as_str(), "42");
        assert_eq!(decode(r#"{"answer": true}"#).as_str(), "true");
        assert_eq!(decode(r#"{"answer": {"a": 1}}"#).as_str(), "[object Object]");
    }

    #[test]
    fn test_answer_falsy_values_empty() {
        for json in [
            r#"{"answer": false}"#,
            r#"{"answer": 0}"#,
            r#"{"answer": 0.0}"#,
            r#"{"answer": ""}"#,
        ] {
            assert!(decode(json).is_empty(), "{json}");
        }
    }

    #[test]
    fn test_answer_mixed_list_item_by_item() {
        assert_eq!(decode(r#"{"answer": [1, null]}"#).as_str(), "1,");
        assert_eq!(
            decode(r#"{"answer": ["Day 1", 2, true, null, ["a", "b"]]}"#).as_str(),
            "Day 1,2,true,,a,b"
        );
        assert!(decode(r#"{"answer": []}"#).is_empty());
    }

    #[test]
    fn test_question_body() {
        let body = QuestionBody { question: "Where is K2?" };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"question":"Where is K2?"}"#
        );
    }

    #[test]
    fn test_hotels_body() {
        let body: HotelsBody = serde_json::from_str(
            r#"{"hotel_names": [{"name": "Serena", "img": "s.jpg", "review": "Nice"}]}"#,
        )
        .unwrap();
        assert_eq!(body.hotel_names, vec![Hotel::new("Serena", "s.jpg", "Nice")]);
    }

    #[test]
    fn test_hotels_body_null_review_keeps_other_hotels() {
        let body: HotelsBody = serde_json::from_str(
            r#"{"hotel_names": [
                {"name": "Serena", "img": "s.jpg", "review": null},
                {"name": "Avari", "img": "a.jpg", "review": "Classic"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            body.hotel_names,
            vec![
                Hotel::new("Serena", "s.jpg", ""),
                Hotel::new("Avari", "a.jpg", "Classic"),
            ]
        );
    }
}
