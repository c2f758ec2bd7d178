//! Wire format of the generative-language endpoint.
//!
//! The request carries the prompt as `contents[].parts[].text`; the reply's
//! only interesting field is `candidates[0].content.parts[0].text`. Anything
//! else on the success path is treated as malformed.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Clone)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Part {
    pub text: String,
}

impl GenerateRequest {
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

#[derive(Deserialize, Debug)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug, Default)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug, Default)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

/// Error object returned by the API on failure responses.
#[derive(Deserialize, Debug)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate, when the expected nested path is present.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

impl ApiError {
    pub fn summary(&self) -> String {
        match (&self.message, &self.status) {
            (Some(message), Some(status)) => format!("{} ({})", message, status),
            (Some(message), None) => message.clone(),
            (None, Some(status)) => status.clone(),
            (None, None) => "Unknown API error".to_string(),
        }
    }
}

/// Strips the fenced-code wrapper the model tends to put around Markdown
/// answers: a leading ```` ```markdown ```` line and a trailing ```` ``` ````
/// line, each removed only when present.
pub fn strip_markdown_fence(text: &str) -> String {
    let mut inner = text.trim();

    // Only a full fence line counts: "```markdown" glued to other text on
    // the same line is content, not a fence.
    if let Some(rest) = inner.strip_prefix("```markdown") {
        if let Some(rest) = rest.strip_prefix('\n') {
            inner = rest;
        } else if rest.is_empty() {
            inner = rest;
        }
    }
    if let Some(rest) = inner.strip_suffix("```") {
        inner = rest.strip_suffix('\n').unwrap_or(rest);
    }

    inner.to_string()
}
