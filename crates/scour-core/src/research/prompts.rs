/// System prompt for the summarization step.
pub const SUMMARY_SYSTEM_PROMPT: &str = "You are a research expert. Provide a concise, \
well-structured summary of the research findings in 2-3 paragraphs.";

/// One-word prompt used to validate provider credentials.
pub const VALIDATION_PING: &str = "Ping";

/// Builds the user prompt for summarization.
pub fn build_summary_prompt(topic: &str, combined_text: &str) -> String {
    format!(
        "Topic: {topic}\n\nSources:\n{combined_text}\n\nPlease summarize the key findings."
    )
}
