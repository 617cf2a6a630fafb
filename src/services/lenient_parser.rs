use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("lenient JSON parse failed: {0}")]
pub struct ParseError(pub String);

/// Parses JSON5: trailing commas, comments, single quotes and unquoted keys
/// are accepted on top of strict JSON.
pub fn parse_lenient(text: &str) -> Result<Value, ParseError> {
    json5::from_str::<Value>(text).map_err(|e| ParseError(e.to_string()))
}
