use notesync_common::{AppConfig, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::client::GroqClient;
use crate::llm_trait::SummaryProvider;
use crate::types::Summary;

/// Maximum overview length of the fallback summary, in characters
pub const FALLBACK_OVERVIEW_CHARS: usize = 160;

const ELLIPSIS: char = '…';

/// Summarization strategy
///
/// Delegates to a [`SummaryProvider`] when one is configured and falls back to
/// a truncated overview when there is none or when the provider fails.
/// Provider failures never reach the caller.
#[derive(Clone)]
pub struct Summarizer {
    provider: Option<Arc<dyn SummaryProvider>>,
}

impl Summarizer {
    /// Create new summarizer
    pub fn new(provider: Option<Arc<dyn SummaryProvider>>) -> Self {
        Self { provider }
    }

    /// Summarizer that always produces the fallback summary
    pub fn fallback_only() -> Self {
        Self::new(None)
    }

    /// Build from configuration, using Groq when an API key is present
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let provider = GroqClient::from_config(config)?
            .map(|client| Arc::new(client) as Arc<dyn SummaryProvider>);

        match &provider {
            Some(p) => info!("Summaries use provider '{}'", p.name()),
            None => info!("No completion API key configured, summaries use fallback only"),
        }

        Ok(Self::new(provider))
    }

    /// Provider name, if one is configured
    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_deref().map(|p| p.name())
    }

    /// Summarize meeting notes
    pub async fn summarize(&self, notes: &str) -> Summary {
        info!(
            "Starting summarization - Text length: {} chars",
            notes.chars().count()
        );

        if let Some(provider) = &self.provider {
            match provider.summarize(notes).await {
                Ok(summary) => {
                    debug!("Provider '{}' returned a summary", provider.name());
                    return summary;
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        kind = e.kind(),
                        "Summarization failed, falling back: {}",
                        e
                    );
                }
            }
        }

        fallback_summary(notes)
    }
}

/// Deterministic summary used without a working provider
pub fn fallback_summary(notes: &str) -> Summary {
    Summary {
        overview: truncate_overview(notes, FALLBACK_OVERVIEW_CHARS),
        ..Summary::default()
    }
}

fn truncate_overview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            let mut overview = text[..cut].to_string();
            overview.push(ELLIPSIS);
            overview
        }
        None => text.to_string(),
    }
}
