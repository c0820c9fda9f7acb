//! The remote chat session and its factory.
//!
//! A [`TutorSession`] is the opaque handle to an open dialogue with the
//! hosted model: it owns the HTTP client and the API-side message
//! history, and exposes a single `send` operation. Creating a session
//! performs no network I/O; the first network interaction happens on
//! the first send.

use crate::client::Gemini;
use crate::error::{Error, Result};
use crate::types::{Content, GenerateContentParams, GenerationConfig};

use super::config::ChatConfig;

/// Behavior of a remote chat session, seen from the controller.
///
/// The controller depends on this trait rather than on [`TutorSession`]
/// directly so that tests can inject a fake backend.
#[async_trait::async_trait]
pub trait ChatBackend: Send {
    /// Sends one user message and returns the model's reply text.
    async fn send(&mut self, text: &str) -> Result<String>;
}

/// Builds remote chat sessions.
///
/// One factory builds at most one live session at a time from the
/// controller's point of view: the controller replaces its handle
/// wholesale on clear rather than pooling.
pub trait SessionFactory {
    /// The session type this factory produces.
    type Session: ChatBackend;

    /// Creates a fresh session. Fails with a configuration error when
    /// required credentials are absent; performs no network call.
    fn create(&self) -> Result<Self::Session>;
}

/// A chat session backed by the Gemini API.
pub struct TutorSession {
    client: Gemini,
    config: ChatConfig,
    history: Vec<Content>,
}

impl TutorSession {
    /// Creates a new session with the given client and configuration.
    pub fn new(client: Gemini, config: ChatConfig) -> Self {
        Self {
            client,
            config,
            history: Vec::new(),
        }
    }

    /// Returns the number of contents accumulated on the API side.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn build_params(&self) -> GenerateContentParams {
        let mut params = GenerateContentParams::new(self.history.clone())
            .with_system_instruction(self.config.system_instruction.as_str());
        if let Some(max_output_tokens) = self.config.max_output_tokens {
            params = params.with_generation_config(
                GenerationConfig::new().with_max_output_tokens(max_output_tokens),
            );
        }
        params
    }
}

#[async_trait::async_trait]
impl ChatBackend for TutorSession {
    async fn send(&mut self, text: &str) -> Result<String> {
        let previous_len = self.history.len();
        self.history.push(Content::user(text));

        let outcome = self.client.generate(&self.config.model, self.build_params()).await;

        match outcome {
            Ok(response) => match response.text() {
                Some(reply) => {
                    self.history.push(Content::model(reply.clone()));
                    Ok(reply)
                }
                None => {
                    self.history.truncate(previous_len);
                    Err(Error::serialization(
                        "response contained no text candidates",
                        None,
                    ))
                }
            },
            Err(err) => {
                // Keep the API-side history consistent with what the
                // model has actually answered.
                self.history.truncate(previous_len);
                Err(err)
            }
        }
    }
}

/// Factory for Gemini-backed tutor sessions.
pub struct GeminiSessionFactory {
    api_key: Option<String>,
    config: ChatConfig,
}

impl GeminiSessionFactory {
    /// Creates a factory that reads the API key from the environment.
    pub fn new(config: ChatConfig) -> Self {
        Self {
            api_key: None,
            config,
        }
    }

    /// Creates a factory with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>, config: ChatConfig) -> Self {
        Self {
            api_key: Some(api_key.into()),
            config,
        }
    }
}

impl SessionFactory for GeminiSessionFactory {
    type Session = TutorSession;

    fn create(&self) -> Result<TutorSession> {
        let client = Gemini::new(self.api_key.clone())?;
        Ok(TutorSession::new(client, self.config.clone()))
    }
}
