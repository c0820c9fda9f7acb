// Public modules
pub mod chat;
pub mod client;
pub mod error;
pub mod observability;
pub mod render;
pub mod types;

// Re-exports
pub use client::Gemini;
pub use error::{Error, ErrorKind, Result};
pub use render::{PlainTextRenderer, Renderer};
pub use types::*;
