use async_trait::async_trait;
use notesync_common::{AppConfig, NoteSyncError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use crate::llm_trait::SummaryProvider;
use crate::parse::parse_summary_reply;
use crate::prompts::{summary_prompt, SYSTEM_PROMPT};
use crate::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Summary};

const SUMMARY_TEMPERATURE: f32 = 0.2;
const SUMMARY_MAX_TOKENS: u32 = 700;

/// Groq chat completions client (OpenAI-compatible API)
#[derive(Debug, Clone)]
pub struct GroqClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl GroqClient {
    /// Create new Groq client
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let model = model.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("Groq client initialized: {} (model {})", base_url, model);
        Ok(Self {
            base_url,
            api_key: api_key.into(),
            model,
            client,
        })
    }

    /// Build a client from configuration, `None` when no API key is set
    pub fn from_config(config: &AppConfig) -> Result<Option<Self>> {
        let Some(api_key) = config.groq_api_key.as_deref() else {
            return Ok(None);
        };

        Self::new(
            &config.groq_base_url,
            api_key,
            &config.groq_model,
            Duration::from_secs(config.groq_timeout_secs),
        )
        .map(Some)
    }

    /// Single chat completion call, returns the trimmed first choice
    pub async fn complete(&self, request: &ChatCompletionRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        debug!(
            "Sending chat completion - Model: {}, Messages: {}",
            request.model,
            request.messages.len()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| NoteSyncError::network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Groq error body: {}", body);
            return Err(NoteSyncError::upstream(format!("Groq API returned {}", status)));
        }

        let result: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| NoteSyncError::llm(format!("Failed to parse response: {}", e)))?;

        let content = result.first_content();
        debug!("Received completion - Length: {}", content.len());

        Ok(content)
    }

    fn summary_request(&self, notes: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(summary_prompt(notes)),
            ],
            temperature: Some(SUMMARY_TEMPERATURE),
            max_tokens: Some(SUMMARY_MAX_TOKENS),
        }
    }
}

#[async_trait]
impl SummaryProvider for GroqClient {
    fn name(&self) -> &str {
        "groq"
    }

    async fn summarize(&self, notes: &str) -> Result<Summary> {
        let request = self.summary_request(notes);
        let reply = self.complete(&request).await?;

        parse_summary_reply(&reply)
            .map_err(|e| NoteSyncError::llm(format!("Groq returned non-JSON: {}", e)))
    }
}
