//! Integration tests for the conversation controller.
//!
//! These tests drive the controller against a scripted fake backend, so
//! they exercise the full submission protocol, the persistence adapter,
//! and the error paths without any network access.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tempfile::{TempDir, tempdir};

use molaris::chat::{
    APOLOGY, BOOT_GREETING, ChatBackend, ChatController, ConversationStore, RESET_GREETING,
    SessionFactory,
};
use molaris::types::{Turn, TurnRole};
use molaris::{Error, Result};

/// A backend that answers from a scripted queue of outcomes.
struct ScriptedBackend {
    replies: Arc<Mutex<VecDeque<Result<String>>>>,
}

#[async_trait::async_trait]
impl ChatBackend for ScriptedBackend {
    async fn send(&mut self, _text: &str) -> Result<String> {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::internal_server("script exhausted")))
    }
}

/// A factory whose creation outcome and session replies are scripted.
struct ScriptedFactory {
    fail_create: bool,
    replies: Arc<Mutex<VecDeque<Result<String>>>>,
}

impl ScriptedFactory {
    fn new() -> Self {
        Self {
            fail_create: false,
            replies: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    fn failing() -> Self {
        Self {
            fail_create: true,
            replies: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    fn push_reply(&self, reply: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(reply.to_string()));
    }

    fn push_failure(&self, err: Error) {
        self.replies.lock().unwrap().push_back(Err(err));
    }
}

impl SessionFactory for ScriptedFactory {
    type Session = ScriptedBackend;

    fn create(&self) -> Result<ScriptedBackend> {
        if self.fail_create {
            return Err(Error::configuration(
                "API key not provided and GEMINI_API_KEY environment variable not set",
            ));
        }
        Ok(ScriptedBackend {
            replies: Arc::clone(&self.replies),
        })
    }
}

fn store_in(dir: &TempDir) -> ConversationStore {
    ConversationStore::new(dir.path().join("history.json"))
}

fn controller_in(dir: &TempDir) -> ChatController<ScriptedFactory> {
    ChatController::new(ScriptedFactory::new(), store_in(dir))
}

#[test]
fn seed_invariant_on_fresh_store() {
    let dir = tempdir().unwrap();
    let mut controller = controller_in(&dir);
    controller.initialize();

    assert_eq!(controller.conversation().len(), 1);
    assert_eq!(controller.conversation()[0].role, TurnRole::Model);
    assert_eq!(controller.conversation()[0].content, BOOT_GREETING);
    assert!(controller.error().is_none());
    assert!(controller.has_session());
}

#[tokio::test]
async fn successful_submit_appends_user_then_model() {
    let dir = tempdir().unwrap();
    let factory = ScriptedFactory::new();
    factory.push_reply("La dentina es el tejido bajo el esmalte.");
    let mut controller = ChatController::new(factory, store_in(&dir));
    controller.initialize();

    controller.submit("  ¿Qué es la dentina?  ").await;

    let turns = controller.conversation();
    assert_eq!(turns.len(), 3);
    assert_eq!(turns[1].role, TurnRole::User);
    assert_eq!(turns[1].content, "¿Qué es la dentina?");
    assert_eq!(turns[2].role, TurnRole::Model);
    assert_eq!(turns[2].content, "La dentina es el tejido bajo el esmalte.");
    assert!(controller.error().is_none());
    assert!(!controller.is_in_flight());
}

#[tokio::test]
async fn failed_submit_appends_apology_and_sets_error() {
    let dir = tempdir().unwrap();
    let factory = ScriptedFactory::new();
    factory.push_failure(Error::rate_limit("quota exceeded", Some(30)));
    let mut controller = ChatController::new(factory, store_in(&dir));
    controller.initialize();

    controller.submit("¿Qué es la dentina?").await;

    let turns = controller.conversation();
    assert_eq!(turns.len(), 3);
    assert_eq!(turns[1].role, TurnRole::User);
    assert_eq!(turns[2].role, TurnRole::Model);
    assert_eq!(turns[2].content, APOLOGY);
    assert_eq!(controller.error(), Some(APOLOGY));
    assert!(!controller.is_in_flight());
}

#[tokio::test]
async fn retry_after_failure_clears_error_state() {
    let dir = tempdir().unwrap();
    let factory = ScriptedFactory::new();
    factory.push_failure(Error::internal_server("boom"));
    factory.push_reply("Segunda vez con éxito.");
    let mut controller = ChatController::new(factory, store_in(&dir));
    controller.initialize();

    controller.submit("primer intento").await;
    assert_eq!(controller.error(), Some(APOLOGY));

    controller.submit("segundo intento").await;
    assert!(controller.error().is_none());
    assert_eq!(controller.conversation().len(), 5);
    assert_eq!(
        controller.last_turn().unwrap().content,
        "Segunda vez con éxito."
    );
}

#[tokio::test]
async fn blank_input_is_a_no_op() {
    let dir = tempdir().unwrap();
    let mut controller = controller_in(&dir);
    controller.initialize();

    controller.submit("   ").await;
    controller.submit("").await;
    assert_eq!(controller.conversation().len(), 1);
}

#[tokio::test]
async fn conversation_round_trips_through_storage() {
    let dir = tempdir().unwrap();
    let factory = ScriptedFactory::new();
    factory.push_reply("Respuesta uno.");
    factory.push_reply("Respuesta dos.");
    let mut controller = ChatController::new(factory, store_in(&dir));
    controller.initialize();

    controller.submit("pregunta uno").await;
    controller.submit("pregunta dos").await;
    let expected: Vec<Turn> = controller.conversation().to_vec();

    assert_eq!(store_in(&dir).load(), Some(expected.clone()));

    // A second controller over the same store adopts the conversation.
    let mut restored = controller_in(&dir);
    restored.initialize();
    assert_eq!(restored.conversation(), expected.as_slice());
}

#[test]
fn corrupt_snapshot_is_replaced_by_seed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "not valid json at all").unwrap();

    let mut controller = controller_in(&dir);
    controller.initialize();

    assert_eq!(controller.conversation().len(), 1);
    assert_eq!(controller.conversation()[0].content, BOOT_GREETING);
    // The corrupt value is gone; the store reports no prior state.
    assert!(!path.exists());
    assert!(store_in(&dir).load().is_none());
}

#[test]
fn empty_snapshot_is_replaced_by_seed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "[]").unwrap();

    let mut controller = controller_in(&dir);
    controller.initialize();

    assert_eq!(controller.conversation().len(), 1);
    assert!(!path.exists());
}

#[tokio::test]
async fn clear_resets_conversation_and_wipes_storage() {
    let dir = tempdir().unwrap();
    let factory = ScriptedFactory::new();
    factory.push_reply("Una respuesta.");
    let mut controller = ChatController::new(factory, store_in(&dir));
    controller.initialize();
    controller.submit("una pregunta").await;
    assert_eq!(controller.conversation().len(), 3);

    controller.clear();

    assert_eq!(controller.conversation().len(), 1);
    assert_eq!(controller.conversation()[0].role, TurnRole::Model);
    assert_eq!(controller.conversation()[0].content, RESET_GREETING);
    // The snapshot is deleted and not rewritten until the next mutation.
    assert!(store_in(&dir).load().is_none());
    assert!(controller.has_session());
    assert!(controller.error().is_none());
}

#[tokio::test]
async fn mutation_after_clear_rewrites_storage() {
    let dir = tempdir().unwrap();
    let factory = ScriptedFactory::new();
    factory.push_reply("Después del borrado.");
    let mut controller = ChatController::new(factory, store_in(&dir));
    controller.initialize();
    controller.clear();

    controller.submit("hola de nuevo").await;

    let persisted = store_in(&dir).load().unwrap();
    assert_eq!(persisted.len(), 3);
    assert_eq!(persisted[0].content, RESET_GREETING);
}

#[tokio::test]
async fn factory_failure_at_initialize_still_seeds_and_submit_apologizes() {
    let dir = tempdir().unwrap();
    let mut controller = ChatController::new(ScriptedFactory::failing(), store_in(&dir));
    controller.initialize();

    // Conversation is viewable and composable despite the failure.
    assert_eq!(controller.conversation().len(), 1);
    assert!(!controller.has_session());
    let error = controller.error().unwrap().to_string();
    assert!(error.contains("GEMINI_API_KEY"));

    // Submitting against the missing handle still appends both turns.
    controller.submit("¿hay alguien ahí?").await;
    let turns = controller.conversation();
    assert_eq!(turns.len(), 3);
    assert_eq!(turns[1].role, TurnRole::User);
    assert_eq!(turns[2].content, APOLOGY);
    assert_eq!(controller.error(), Some(APOLOGY));
}

#[tokio::test]
async fn clear_with_failing_factory_keeps_reset_and_permits_submits() {
    let dir = tempdir().unwrap();
    let mut controller = ChatController::new(ScriptedFactory::failing(), store_in(&dir));
    controller.initialize();

    controller.clear();

    // The reset stands even though re-initialization failed.
    assert_eq!(controller.conversation().len(), 1);
    assert_eq!(controller.conversation()[0].content, RESET_GREETING);
    assert!(!controller.has_session());
    assert!(controller.error().is_some());

    // Nothing blocks further submissions; they fail with the apology.
    controller.submit("otra pregunta").await;
    assert_eq!(controller.last_turn().unwrap().content, APOLOGY);
}
