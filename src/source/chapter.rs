use crate::error::BuildError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One chapter exactly as it arrives in the chapter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterInput {
    pub title: String,
    pub content: String,
}

impl ChapterInput {
    #[cfg(test)]
    pub fn new<T: ToString, C: ToString>(title: T, content: C) -> ChapterInput {
        ChapterInput {
            title: title.to_string(),
            content: content.to_string(),
        }
    }
}

/// Parse a chapter list body, rejecting anything that isn't an array of
/// objects with non-empty `title` and `content` strings.
///
/// `source_url` is only used to describe malformed JSON.
pub fn parse_chapters(source_url: &str, body: &str) -> Result<Vec<ChapterInput>, BuildError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| BuildError::fetch(source_url, format!("malformed JSON body: {e}")))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(BuildError::SchemaViolation(format!(
                "expected an array of chapters, found {}",
                kind_of(&other)
            )))
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let Value::Object(fields) = item else {
                return Err(BuildError::SchemaViolation(format!(
                    "chapter {i} is {}, not an object",
                    kind_of(item)
                )));
            };
            let field = |name: &str| match fields.get(name) {
                Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
                Some(Value::String(_)) => Err(BuildError::SchemaViolation(format!(
                    "chapter {i} has an empty `{name}`"
                ))),
                Some(other) => Err(BuildError::SchemaViolation(format!(
                    "chapter {i} has a `{name}` that is {}, not a string",
                    kind_of(other)
                ))),
                None => Err(BuildError::SchemaViolation(format!(
                    "chapter {i} is missing `{name}`"
                ))),
            };
            Ok(ChapterInput {
                title: field("title")?,
                content: field("content")?,
            })
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn violation(body: &str) -> String {
        match parse_chapters("test.json", body) {
            Err(BuildError::SchemaViolation(msg)) => msg,
            other => panic!("expected a schema violation, got {other:?}"),
        }
    }

    #[test]
    fn parses_chapters_in_order() {
        let chapters = parse_chapters(
            "test.json",
            r#"[{"title":"Ch1","content":"Para A\n\nPara B"},{"title":"Ch2","content":"Solo paragraph","extra":1}]"#,
        )
        .expect("can parse chapters");
        assert_eq!(
            chapters,
            vec![
                ChapterInput::new("Ch1", "Para A\n\nPara B"),
                ChapterInput::new("Ch2", "Solo paragraph"),
            ]
        );
    }

    #[test]
    fn empty_list_is_allowed() {
        assert!(parse_chapters("test.json", "[]").expect("can parse").is_empty());
    }

    #[test]
    fn rejects_non_array() {
        assert_eq!(
            violation(r#"{"title":"x"}"#),
            "expected an array of chapters, found an object"
        );
    }

    #[test]
    fn rejects_bad_elements() {
        assert_eq!(violation(r#"["nope"]"#), "chapter 0 is a string, not an object");
        assert_eq!(
            violation(r#"[{"title":"a","content":"b"},{"title":"c"}]"#),
            "chapter 1 is missing `content`"
        );
        assert_eq!(
            violation(r#"[{"title":"  ","content":"b"}]"#),
            "chapter 0 has an empty `title`"
        );
        assert_eq!(
            violation(r#"[{"title":"a","content":7}]"#),
            "chapter 0 has a `content` that is a number, not a string"
        );
    }

    #[test]
    fn malformed_json_is_a_fetch_failure() {
        match parse_chapters("test.json", "[{") {
            Err(BuildError::FetchFailure { source_url, cause }) => {
                assert_eq!(source_url, "test.json");
                assert!(cause.starts_with("malformed JSON body"));
            }
            other => panic!("expected a fetch failure, got {other:?}"),
        }
    }
}
