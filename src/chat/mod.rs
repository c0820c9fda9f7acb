//! Tutor chat application module.
//!
//! This module provides the conversation state manager behind the
//! molaris-chat REPL. It supports:
//!
//! - A persistent conversation seeded with a fixed Spanish greeting
//! - Best-effort snapshot persistence with corruption recovery
//! - A single-submission-at-a-time protocol against the remote model
//! - Slash commands for session control
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`config`]: CLI argument parsing, configuration, and the fixed
//!   user-facing strings
//! - [`store`]: the snapshot persistence adapter
//! - [`session`]: the remote session handle and its factory
//! - [`controller`]: conversation state and the submission protocol
//! - [`commands`]: slash command parsing

mod commands;
mod config;
mod controller;
mod session;
mod store;

pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{APOLOGY, BOOT_GREETING, ChatArgs, ChatConfig, RESET_GREETING, SYSTEM_INSTRUCTION};
pub use controller::ChatController;
pub use session::{ChatBackend, GeminiSessionFactory, SessionFactory, TutorSession};
pub use store::ConversationStore;
