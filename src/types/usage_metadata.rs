use serde::{Deserialize, Serialize};

/// Token accounting reported by the API for one request.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens in the prompt (system instruction plus contents).
    #[serde(default)]
    pub prompt_token_count: u64,

    /// Tokens across all returned candidates.
    #[serde(default)]
    pub candidates_token_count: u64,

    /// Total tokens billed for the request.
    #[serde(default)]
    pub total_token_count: u64,
}
