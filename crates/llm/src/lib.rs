//! NoteSync LLM Integration
//!
//! Groq chat completions client, reply parsing and the summarization strategy

mod client;
mod llm_trait;
mod parse;
mod prompts;
mod summarize;
mod types;

pub use client::GroqClient;
pub use llm_trait::SummaryProvider;
pub use parse::{parse_summary_reply, ReplyParseError};
pub use prompts::{summary_prompt, SUMMARY_INSTRUCTIONS, SYSTEM_PROMPT};
pub use summarize::{fallback_summary, Summarizer, FALLBACK_OVERVIEW_CHARS};
pub use types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Role, Summary};
