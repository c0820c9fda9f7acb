use serde::{Deserialize, Serialize};

use crate::types::{Content, GenerationConfig, Part};

/// A system instruction attached to a generate-content request.
///
/// Unlike [`Content`], a system instruction carries no role on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemInstruction {
    /// The ordered parts of the instruction.
    pub parts: Vec<Part>,
}

impl SystemInstruction {
    /// Create a system instruction from a single text string.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::new(text)],
        }
    }
}

impl From<&str> for SystemInstruction {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SystemInstruction {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Parameters for a generate-content request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentParams {
    /// The system instruction, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,

    /// The conversation so far, oldest first, ending with the newest
    /// user content.
    pub contents: Vec<Content>,

    /// Sampling configuration, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentParams {
    /// Create a new request with the given contents and no system
    /// instruction or sampling overrides.
    pub fn new(contents: Vec<Content>) -> Self {
        Self {
            system_instruction: None,
            contents,
            generation_config: None,
        }
    }

    /// Sets the system instruction.
    pub fn with_system_instruction(mut self, instruction: impl Into<SystemInstruction>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    /// Sets the generation config.
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }
}
