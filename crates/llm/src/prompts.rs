//! Prompt templates for meeting-note summarization

/// System instruction sent with every summarization request
pub const SYSTEM_PROMPT: &str = "You produce concise, structured summaries as valid JSON only.";

/// Instruction block describing the expected JSON schema
pub const SUMMARY_INSTRUCTIONS: &str = r#"You are an assistant that extracts structured summaries from meeting notes.
Return strict JSON with keys: overview (2-4 sentences), actionItems (array of short strings, imperative), decisions (array), topics (array of short tags).
Input notes:"#;

/// User prompt embedding the raw notes
pub fn summary_prompt(notes: &str) -> String {
    format!("{}\n\n{}", SUMMARY_INSTRUCTIONS, notes)
}
