use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// Single chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// OpenAI-compatible chat completion request
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// Model name (e.g., "llama-3.1-8b-instant")
    pub model: String,

    /// Conversation, system message first
    pub messages: Vec<ChatMessage>,

    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// OpenAI-compatible chat completion response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Trimmed content of the first choice, empty when missing
    pub fn first_content(&self) -> String {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }
}

/// Structured meeting summary
///
/// All four fields are always present on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Short prose overview
    #[serde(default)]
    pub overview: String,

    /// Follow-up tasks, imperative phrasing
    #[serde(default)]
    pub action_items: Vec<String>,

    /// Decisions taken during the meeting
    #[serde(default)]
    pub decisions: Vec<String>,

    /// Short topic tags
    #[serde(default)]
    pub topics: Vec<String>,
}

impl Summary {
    /// Build a summary from a loosely shaped JSON object
    ///
    /// A non-string `overview` becomes empty text. A list field that is not an
    /// array becomes empty. Array elements keep strings verbatim, render
    /// numbers and booleans as JSON text, and drop everything else.
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        let overview = object
            .get("overview")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Self {
            overview,
            action_items: string_list(object.get("actionItems")),
            decisions: string_list(object.get("decisions")),
            topics: string_list(object.get("topics")),
        }
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .collect()
}
