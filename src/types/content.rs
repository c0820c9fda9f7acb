use serde::{Deserialize, Serialize};

/// A single part of a content entry. The tutor only ever exchanges text
/// parts; other Gemini part kinds (inline data, function calls) are not
/// modeled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Part {
    /// The text of this part.
    pub text: String,
}

impl Part {
    /// Create a new text part.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Role type for a content entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentRole {
    /// User role.
    User,

    /// Model role.
    Model,
}

/// One entry of the request/response contents array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content {
    /// The role of the author of this content.
    pub role: ContentRole,

    /// The ordered parts of this content.
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a new `Content` with the given role and a single text part.
    pub fn new(role: ContentRole, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part::new(text)],
        }
    }

    /// Create a new user `Content` with a single text part.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ContentRole::User, text)
    }

    /// Create a new model `Content` with a single text part.
    pub fn model(text: impl Into<String>) -> Self {
        Self::new(ContentRole::Model, text)
    }

    /// Concatenates the text of all parts.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .map(|part| part.text.as_str())
            .collect::<Vec<_>>()
            .join("")
    }
}
