//! Type definitions for the Gemini generate-content API and the local
//! conversation model.

mod content;
mod generate_content_params;
mod generate_content_response;
mod generation_config;
mod model;
mod turn;
mod usage_metadata;

pub use content::{Content, ContentRole, Part};
pub use generate_content_params::{GenerateContentParams, SystemInstruction};
pub use generate_content_response::{Candidate, GenerateContentResponse};
pub use generation_config::GenerationConfig;
pub use model::{KnownModel, Model};
pub use turn::{Turn, TurnRole};
pub use usage_metadata::UsageMetadata;
