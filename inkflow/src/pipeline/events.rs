//! Tagged stage-result events for incremental delivery.

use crate::error::Error;
use crate::pipeline::Outline;
use serde::Serialize;

/// One event in a streamed pipeline run.
///
/// Serializes as `{"event": "<name>", "data": {...}}`, with the payload
/// shape depending on the stage. A run emits at most one event per stage,
/// in stage order, and ends with either [`FinalContent`](Self::FinalContent)
/// or a terminal [`Error`](Self::Error).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum StageEvent {
    /// Candidate topics from the generation stage.
    Topics {
        /// Topics in order of appearance.
        topics: Vec<String>,
    },

    /// Outline for the chosen topic.
    Outline {
        /// The parsed outline.
        outline: Outline,
        /// The topic the outline was created for.
        topic: String,
    },

    /// The assembled draft.
    InitialContent {
        /// Draft text, headings included.
        content: String,
    },

    /// The polished post; last event of a successful run.
    FinalContent {
        /// Final text.
        content: String,
    },

    /// Terminal failure; no further events follow.
    Error {
        /// Human-readable message from the failed stage.
        error: String,
    },
}

impl StageEvent {
    /// Build a terminal error event from a pipeline error.
    #[must_use]
    pub fn error(err: &Error) -> Self {
        Self::Error {
            error: err.to_string(),
        }
    }

    /// The wire name of this event.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Topics { .. } => "topics",
            Self::Outline { .. } => "outline",
            Self::InitialContent { .. } => "initial_content",
            Self::FinalContent { .. } => "final_content",
            Self::Error { .. } => "error",
        }
    }
}
