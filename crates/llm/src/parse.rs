//! Recovery of a [`Summary`] from a free-text model reply

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

use crate::types::Summary;

/// Why a model reply could not be turned into a summary
#[derive(Debug, thiserror::Error)]
pub enum ReplyParseError {
    #[error("reply was empty")]
    Empty,

    #[error("reply contains no JSON object")]
    NoJsonObject,

    #[error("embedded JSON object is malformed: {0}")]
    Malformed(String),
}

/// Greedy match from the first `{` to the last `}`, across newlines
fn brace_block() -> &'static Regex {
    static BRACE_BLOCK: OnceLock<Regex> = OnceLock::new();
    BRACE_BLOCK.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("static regex"))
}

/// Parse a model reply into a [`Summary`]
///
/// Stage one parses the whole reply as a JSON object. Stage two extracts the
/// brace block and parses that, which recovers objects wrapped in prose or
/// code fences. Field shapes are normalized by [`Summary::from_json_object`].
pub fn parse_summary_reply(raw: &str) -> Result<Summary, ReplyParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ReplyParseError::Empty);
    }

    if let Ok(object) = parse_object(raw) {
        return Ok(Summary::from_json_object(&object));
    }

    let block = brace_block()
        .find(raw)
        .ok_or(ReplyParseError::NoJsonObject)?;

    parse_object(block.as_str())
        .map(|object| Summary::from_json_object(&object))
}

fn parse_object(text: &str) -> Result<Map<String, Value>, ReplyParseError> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(other) => Err(ReplyParseError::Malformed(format!(
            "expected an object, found {}",
            json_kind(&other)
        ))),
        Err(e) => Err(ReplyParseError::Malformed(e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
