//! Configuration types for the tutor chat application.
//!
//! This module provides CLI argument parsing via `arrrg`, the resolved
//! chat configuration, and the fixed Spanish-language strings that make
//! up the user-facing protocol. The persona and the greetings are baked
//! in: the tutor has exactly one audience and one voice, and no per-call
//! configuration is exposed.

use std::path::PathBuf;

use arrrg_derive::CommandLine;

use crate::types::{KnownModel, Model};

/// Default file the conversation snapshot is persisted to.
const DEFAULT_HISTORY_FILE: &str = "molaris-history.json";

/// The tutoring persona sent as the system instruction on every request.
pub const SYSTEM_INSTRUCTION: &str = "Eres un experto técnico dental con más de 20 años de experiencia. Ahora eres un tutor particular dedicado para estudiantes de tecnología dental. Tu objetivo es explicar temas complejos de forma clara, paciente y precisa. Utiliza analogías cuando sea útil y anima siempre al estudiante a hacer preguntas de seguimiento. Tu tono debe ser profesional, de apoyo y educativo. Responde siempre en español.";

/// Greeting seeded into a brand-new conversation.
pub const BOOT_GREETING: &str = "¡Hola! Soy tu tutor de técnico dental AI. ¿En qué tema te gustaría profundizar hoy? Puedo explicarte desde anatomía dental hasta los últimos materiales y técnicas de laboratorio.";

/// Greeting seeded after the conversation is cleared.
pub const RESET_GREETING: &str =
    "Conversación reiniciada. ¿Sobre qué tema te gustaría aprender ahora?";

/// Fixed notice shown (and recorded as a model turn) when a submission fails.
pub const APOLOGY: &str = "Lo siento, ha ocurrido un error. Por favor, inténtalo de nuevo.";

/// Command-line arguments for the molaris-chat tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Model to use for chat.
    #[arrrg(optional, "Model to use (default: gemini-2.5-pro)", "MODEL")]
    pub model: Option<String>,

    /// File the conversation snapshot is persisted to.
    #[arrrg(optional, "History snapshot file (default: molaris-history.json)", "FILE")]
    pub history: Option<String>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

/// Configuration for a tutor chat session.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// The model to use for generating responses.
    pub model: Model,

    /// The system instruction sent with every request.
    pub system_instruction: String,

    /// Maximum tokens per response. `None` uses the model default.
    pub max_output_tokens: Option<u32>,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,

    /// File the conversation snapshot is persisted to.
    pub history_path: PathBuf,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    ///
    /// Defaults:
    /// - Model: gemini-2.5-pro
    /// - System instruction: the fixed dental tutoring persona
    /// - Max output tokens: model default
    /// - Color: enabled
    /// - History file: molaris-history.json in the working directory
    pub fn new() -> Self {
        Self {
            model: Model::Known(KnownModel::Gemini25Pro),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            max_output_tokens: None,
            use_color: true,
            history_path: PathBuf::from(DEFAULT_HISTORY_FILE),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Sets the maximum tokens per response.
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    /// Sets the history snapshot path.
    pub fn with_history_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_path = path.into();
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        let model = args
            .model
            .map(|s| s.parse::<Model>().unwrap_or(Model::Custom(s)))
            .unwrap_or(Model::Known(KnownModel::Gemini25Pro));

        ChatConfig {
            model,
            use_color: !args.no_color,
            history_path: args
                .history
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE)),
            ..ChatConfig::new()
        }
    }
}
