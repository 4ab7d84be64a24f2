//! Renders a research result into report formats.
//!
//! Every format is lossless with respect to the fields it carries; the
//! JSON export round-trips the full result structure.

use chrono::Utc;
use scour_core::ResearchResult;

/// Renders the result as a Markdown report.
pub fn to_markdown(result: &ResearchResult) -> String {
    let mut md = String::new();

    md.push_str(&format!("# Research Report: {}\n\n", result.topic));
    md.push_str(&format!(
        "**Generated:** {}\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    md.push_str(&format!(
        "**Status:** {} | **Sources:** {} | **Elapsed:** {:.1}s\n\n",
        result.status.as_str(),
        result.sources.len(),
        result.elapsed_seconds
    ));

    md.push_str("## Summary\n\n");
    match (&result.summary, result.summary_provider) {
        (Some(summary), Some(provider)) => {
            md.push_str(summary);
            md.push_str(&format!("\n\n_Summarized by {provider}._\n\n"));
        }
        _ => {
            md.push_str(
                "AI summary unavailable - set OPENROUTER_API_KEY or GROQ_API_KEY \
                 for enhanced summaries.\n\n",
            );
        }
    }

    md.push_str(&format!("## Sources ({})\n\n", result.sources.len()));
    for (i, source) in result.sources.iter().enumerate() {
        md.push_str(&format!("### {}. {}\n\n", i + 1, source.title));
        md.push_str(&format!("**URL:** {}\n\n", source.url));
        md.push_str(&source.extract);
        md.push_str("\n\n");
    }

    md
}

/// Renders the result as plain text (the Markdown report with markers
/// stripped).
pub fn to_text(result: &ResearchResult) -> String {
    to_markdown(result)
        .replace("**", "")
        .replace("### ", "")
        .replace("## ", "")
        .replace("# ", "")
}

/// Renders the result as pretty-printed JSON, lossless for every field.
pub fn to_json(result: &ResearchResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
