use notesync_llm::Summary;
use notesync_common::{NoteSyncError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message returned when `text` is missing, not a string, or blank
pub const MISSING_TEXT_MESSAGE: &str = "Provide meeting notes text in `text` field.";

/// Summarize request body
///
/// `text` is kept loosely typed so a wrong type is reported as invalid input
/// instead of a body deserialization failure.
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: Option<Value>,
}

impl SummarizeRequest {
    /// Meeting notes, verbatim, if present and not blank
    pub fn notes(&self) -> Result<&str> {
        match &self.text {
            Some(Value::String(text)) if !text.trim().is_empty() => Ok(text.as_str()),
            _ => Err(NoteSyncError::invalid_input(MISSING_TEXT_MESSAGE)),
        }
    }
}

/// Summarize response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: Summary,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok"
    pub status: String,

    /// Current UTC time, ISO-8601 with milliseconds
    pub time: String,
}

/// Error envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
