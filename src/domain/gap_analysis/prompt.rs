//! Prompt and response contract for the AI drafting collaborator.
//!
//! The model is asked for a JSON array of `{item, old, new, reason}` objects.
//! Responses may arrive bare or wrapped in a Markdown code fence.

use serde::Deserialize;
use thiserror::Error;

use super::comparison::ComparisonRow;

/// Persona and output contract sent as the system prompt.
pub const SYSTEM_PROMPT: &str = "You are an expert consultant on the standards of the \
Sustainability Standards Board of Japan (SSBJ). Compare the SSBJ standard text with the \
company's report text and produce an old-vs-new comparison table.";

/// A prompt ready to hand to an `AIProvider`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapAnalysisPrompt {
    pub system: String,
    pub user: String,
}

impl GapAnalysisPrompt {
    pub fn build(standards_text: &str, report_text: &str) -> Self {
        let user = format!(
            "Standard source: {standards_text}\n\
             Report source: {report_text}\n\n\
             Output format (JSON):\n\
             [\n  {{\"item\": \"item name\", \"old\": \"current wording\", \
             \"new\": \"recommended SSBJ-compliant draft\", \
             \"reason\": \"basis for the change (SSBJ paragraph)\"}}\n]"
        );
        Self {
            system: SYSTEM_PROMPT.to_string(),
            user,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResponseParseError {
    #[error("response contains no JSON array")]
    NoJson,

    #[error("response JSON is malformed: {0}")]
    Malformed(String),

    #[error("response contains no rows")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    item: String,
    #[serde(default)]
    old: String,
    #[serde(rename = "new")]
    proposed: String,
    #[serde(default)]
    reason: String,
}

/// Parses the model output into comparison rows.
pub fn parse_response(text: &str) -> Result<Vec<ComparisonRow>, ResponseParseError> {
    let json = extract_json_array(text).ok_or(ResponseParseError::NoJson)?;
    let raw: Vec<RawRow> =
        serde_json::from_str(json).map_err(|e| ResponseParseError::Malformed(e.to_string()))?;

    if raw.is_empty() {
        return Err(ResponseParseError::Empty);
    }

    Ok(raw
        .into_iter()
        .map(|r| ComparisonRow::new(r.item, r.old, r.proposed, r.reason))
        .collect())
}

fn extract_json_array(text: &str) -> Option<&str> {
    let body = match text.find("```") {
        Some(open) => {
            let after = &text[open + 3..];
            let after = after.strip_prefix("json").unwrap_or(after);
            match after.find("```") {
                Some(close) => &after[..close],
                None => after,
            }
        }
        None => text,
    };

    let start = body.find('[')?;
    let end = body.rfind(']')?;
    (end > start).then(|| &body[start..=end])
}
