use serde::{Deserialize, Serialize};

use crate::types::{Content, UsageMetadata};

/// One candidate completion from a generate-content response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The generated content. Absent when the candidate was blocked
    /// before any content was produced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,

    /// Why generation stopped (e.g. `STOP`, `MAX_TOKENS`, `SAFETY`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// A generate-content response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// The candidate completions. In practice exactly one.
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    /// Token accounting for the request, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// Returns the concatenated text of the first candidate, or `None`
    /// when the response carries no textual content.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        if content.parts.is_empty() {
            return None;
        }
        Some(content.text())
    }
}
