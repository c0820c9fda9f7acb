use serde::{Deserialize, Serialize};

/// Role type for a conversation turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    /// Authored by the student.
    User,

    /// Authored by the tutor model (including seed greetings and the
    /// apology notice on failure).
    Model,
}

/// One message of the tutoring conversation.
///
/// Turns are immutable once appended; conversation order is append
/// order, oldest first. This is also the element type of the persisted
/// snapshot, so its serde representation is the storage format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Turn {
    /// The author of the turn.
    pub role: TurnRole,

    /// The text of the turn.
    pub content: String,
}

impl Turn {
    /// Create a new `Turn` with the given role and content.
    pub fn new(role: TurnRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a new user `Turn`.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(TurnRole::User, content)
    }

    /// Create a new model `Turn`.
    pub fn model(content: impl Into<String>) -> Self {
        Self::new(TurnRole::Model, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn turn_storage_format() {
        let turn = Turn::user("¿Qué aleaciones se usan en prótesis removible?");
        let json = to_value(&turn).unwrap();

        assert_eq!(
            json,
            json!({
                "role": "user",
                "content": "¿Qué aleaciones se usan en prótesis removible?"
            })
        );
    }

    #[test]
    fn turn_deserialization() {
        let json = json!({"role": "model", "content": "Principalmente cromo-cobalto."});
        let turn: Turn = serde_json::from_value(json).unwrap();
        assert_eq!(turn.role, TurnRole::Model);
        assert_eq!(turn.content, "Principalmente cromo-cobalto.");
    }

    #[test]
    fn unknown_role_is_rejected() {
        let json = json!({"role": "assistant", "content": "hola"});
        assert!(serde_json::from_value::<Turn>(json).is_err());
    }
}
