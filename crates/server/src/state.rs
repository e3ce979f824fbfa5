use notesync_common::{AppConfig, Result};
use notesync_llm::Summarizer;

/// Shared application state
///
/// Immutable after construction; shared across workers through `web::Data`.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Summarization strategy
    pub summarizer: Summarizer,
}

impl AppState {
    /// Create new application state from configuration
    pub fn new(config: AppConfig) -> Result<Self> {
        let summarizer = Summarizer::from_config(&config)?;
        Ok(Self::with_summarizer(config, summarizer))
    }

    /// Create application state with an explicit summarizer
    pub fn with_summarizer(config: AppConfig, summarizer: Summarizer) -> Self {
        Self { config, summarizer }
    }
}
