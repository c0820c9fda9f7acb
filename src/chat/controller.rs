//! Conversation state management.
//!
//! The [`ChatController`] owns the conversation, the session handle, and
//! the error/in-flight status for the lifetime of the process. The
//! presentation layer only reads snapshots and invokes the three
//! operations: `initialize`, `submit`, and `clear`.
//!
//! State rules:
//!
//! - The conversation is never empty after `initialize`: when no usable
//!   snapshot exists it is seeded with a single model greeting.
//! - Every conversation mutation is followed by a best-effort snapshot
//!   write; write failures are logged and dropped.
//! - At most one submission is in flight; a second `submit` while one is
//!   pending is ignored entirely.
//! - A failed submission appends the fixed apology as a model turn, so a
//!   user turn is always answered in the history, even by an error
//!   notice.

use crate::error::Error;
use crate::observability;
use crate::types::Turn;

use super::config::{APOLOGY, BOOT_GREETING, RESET_GREETING};
use super::session::{ChatBackend, SessionFactory};
use super::store::ConversationStore;

/// The conversation controller.
///
/// Generic over the session factory so tests can inject a fake remote
/// backend.
pub struct ChatController<F: SessionFactory> {
    factory: F,
    store: ConversationStore,
    conversation: Vec<Turn>,
    session: Option<F::Session>,
    error: Option<String>,
    in_flight: bool,
}

impl<F: SessionFactory> ChatController<F> {
    /// Creates a controller. Call [`initialize`](Self::initialize) before
    /// submitting.
    pub fn new(factory: F, store: ConversationStore) -> Self {
        Self {
            factory,
            store,
            conversation: Vec::new(),
            session: None,
            error: None,
            in_flight: false,
        }
    }

    /// Adopts the persisted conversation (or seeds a fresh one) and
    /// creates the session handle.
    ///
    /// A factory failure is recorded in the error state rather than
    /// returned: the conversation stays viewable and composable, and
    /// only later submissions will fail.
    pub fn initialize(&mut self) {
        self.conversation = self
            .store
            .load()
            .unwrap_or_else(|| vec![Turn::model(BOOT_GREETING)]);

        match self.factory.create() {
            Ok(session) => self.session = Some(session),
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    /// Submits one user message and appends the model's reply.
    ///
    /// A blank message, or a call while another submission is in flight,
    /// is ignored without touching any state. Otherwise the trimmed text
    /// is appended as a user turn, and exactly one model turn follows:
    /// the reply on success, the fixed apology on any failure (missing
    /// session handle included). The error state is cleared on entry and
    /// set to the apology on failure, so the caller can show a banner
    /// for the most recent submission only.
    pub async fn submit(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() || self.in_flight {
            observability::SUBMISSIONS_REJECTED.click();
            return;
        }

        observability::SUBMISSIONS.click();
        self.conversation.push(Turn::user(text));
        self.persist();
        self.error = None;
        self.in_flight = true;

        let outcome = match self.session.as_mut() {
            Some(session) => session.send(text).await,
            None => Err(Error::configuration("chat session is not initialized")),
        };

        match outcome {
            Ok(reply) => {
                self.conversation.push(Turn::model(reply));
            }
            Err(err) => {
                observability::SUBMISSION_FAILURES.click();
                log::warn!("submission failed: {err}");
                self.error = Some(APOLOGY.to_string());
                self.conversation.push(Turn::model(APOLOGY));
            }
        }
        self.persist();
        self.in_flight = false;
    }

    /// Resets the conversation to the reset greeting, deletes the
    /// snapshot, and replaces the session handle.
    ///
    /// The caller is responsible for interactive confirmation before
    /// invoking this. The snapshot is deleted and not rewritten until
    /// the next mutation. If the factory fails, the reset still stands
    /// and the error state is set; later submissions are permitted and
    /// will take the apology path against the missing handle.
    pub fn clear(&mut self) {
        self.conversation = vec![Turn::model(RESET_GREETING)];
        if let Err(err) = self.store.clear_store() {
            log::warn!("failed to delete history snapshot: {err}");
        }
        self.error = None;
        self.session = None;
        match self.factory.create() {
            Ok(session) => self.session = Some(session),
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    /// Returns a snapshot of the conversation, oldest turn first.
    pub fn conversation(&self) -> &[Turn] {
        &self.conversation
    }

    /// Returns the most recent turn, if any.
    pub fn last_turn(&self) -> Option<&Turn> {
        self.conversation.last()
    }

    /// Returns the current error state.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns true while a submission's remote call has not resolved.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Returns true if a live session handle exists.
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.conversation) {
            observability::STORE_SAVE_ERRORS.click();
            log::warn!("failed to persist conversation: {err}");
        }
    }
}
