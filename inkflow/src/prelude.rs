//! Convenience re-exports for pipeline consumers.

pub use crate::error::{Error, ModelError, Result};
pub use crate::pipeline::events::StageEvent;
pub use crate::pipeline::stream::stage_events;
pub use crate::pipeline::{BlogPipeline, Outline, OutlineSection, Stage};
pub use crate::providers::openai::ChatModel;
pub use crate::providers::{CompletionModel, FromEnv, MockModel, OpenAIClient};
