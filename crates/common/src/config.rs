use crate::error::NoteSyncError;
use crate::logger::parse_log_level;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_GROQ_MODEL: &str = "llama-3.1-8b-instant";
const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_JSON_LIMIT: usize = 2 * 1024 * 1024;

/// NoteSync application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Groq API key; summaries fall back to truncation when absent
    #[serde(skip_serializing)]
    pub groq_api_key: Option<String>,

    /// Groq chat model identifier
    pub groq_model: String,

    /// Groq OpenAI-compatible API base URL
    pub groq_base_url: String,

    /// Timeout for a single completion call, in seconds
    pub groq_timeout_secs: u64,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Directory holding the static web page
    pub static_dir: PathBuf,

    /// Maximum accepted JSON request body, in bytes
    pub json_limit_bytes: usize,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            groq_api_key: None,
            groq_model: DEFAULT_GROQ_MODEL.to_string(),
            groq_base_url: DEFAULT_GROQ_BASE_URL.to_string(),
            groq_timeout_secs: 60,
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            static_dir: PathBuf::from("./public"),
            json_limit_bytes: DEFAULT_JSON_LIMIT,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, NoteSyncError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self::from_lookup(|key| std::env::var(key).ok());

        // Ensure required directories exist
        config.ensure_directories()?;

        Ok(config)
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// Unset, empty, and unparsable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            groq_api_key: get("GROQ_API_KEY").map(|k| k.trim().to_string()),
            groq_model: get("GROQ_MODEL").unwrap_or(defaults.groq_model),
            groq_base_url: get("GROQ_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.groq_base_url),
            groq_timeout_secs: get("GROQ_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.groq_timeout_secs),
            server_host: get("HOST").unwrap_or(defaults.server_host),
            server_port: get("PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.server_port),
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            json_limit_bytes: get("JSON_LIMIT_BYTES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.json_limit_bytes),
            log_dir: get("LOG_DIR").map(PathBuf::from).unwrap_or(defaults.log_dir),
            log_level: get("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Ensure required directories exist, create if not
    pub fn ensure_directories(&self) -> Result<(), NoteSyncError> {
        if !self.log_dir.exists() {
            std::fs::create_dir_all(&self.log_dir).map_err(|e| {
                NoteSyncError::config(format!(
                    "Failed to create directory {}: {}",
                    self.log_dir.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }

    /// Whether the completion service can be used
    pub fn has_llm_credentials(&self) -> bool {
        self.groq_api_key.is_some()
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), NoteSyncError> {
        if self.groq_model.trim().is_empty() {
            return Err(NoteSyncError::config("Groq model name cannot be empty"));
        }

        if !self.groq_base_url.starts_with("http://")
            && !self.groq_base_url.starts_with("https://") {
            return Err(NoteSyncError::config(
                "Groq base URL must start with http:// or https://"
            ));
        }

        if self.server_port == 0 {
            return Err(NoteSyncError::config("Server port cannot be 0"));
        }

        if self.json_limit_bytes == 0 {
            return Err(NoteSyncError::config("JSON body limit cannot be 0"));
        }

        if parse_log_level(&self.log_level).is_none() {
            return Err(NoteSyncError::config(format!(
                "Unknown log level '{}'",
                self.log_level
            )));
        }

        Ok(())
    }
}
