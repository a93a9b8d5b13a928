//! Unified error types for the inkflow pipeline.
//!
//! Two layers of errors exist:
//!
//! - [`Error`]: what pipeline callers see, configuration problems and the
//!   quality gates that abort a run.
//! - [`ModelError`]: what a completion provider can fail with. These never
//!   cross the pipeline boundary: the engine converts a failed completion
//!   call into an empty response, which the gates then reject.

use crate::pipeline::Stage;

/// Result type alias for inkflow operations.
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// Pipeline Errors
// ============================================================================

/// The main error type for pipeline operations.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Required configuration is missing or invalid.
    #[error("configuration: {0}")]
    Config(String),

    /// A stage's output failed its minimum-volume gate.
    #[error("insufficient output from {stage} stage: got {got}, need at least {need}")]
    InsufficientOutput {
        /// The stage whose gate rejected the output.
        stage: Stage,
        /// How many units (topics, sections, words) the stage produced.
        got: usize,
        /// The gate's minimum.
        need: usize,
    },

    /// The polish stage returned the draft unchanged.
    #[error("no meaningful edits were made to the content")]
    NoEffectiveChange,
}

impl Error {
    /// Create a configuration error.
    #[inline]
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an insufficient-output gate error.
    #[inline]
    #[must_use]
    pub const fn insufficient_output(stage: Stage, got: usize, need: usize) -> Self {
        Self::InsufficientOutput { stage, got, need }
    }
}

// ============================================================================
// Provider Errors
// ============================================================================

/// Error type for completion-provider calls.
///
/// Providers return these from [`complete`](crate::providers::CompletionModel::complete);
/// the pipeline swallows them into an empty response (logged at `warn`), so
/// they surface to callers only indirectly through the output gates.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ModelError {
    /// Transport-level HTTP failure.
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned by the provider.
        body: String,
    },

    /// The response did not have the expected shape.
    #[error("response format: {0}")]
    Format(String),
}

impl ModelError {
    /// Create a status error.
    #[inline]
    #[must_use]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create a response-format error.
    #[inline]
    #[must_use]
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_helpers() {
        let err = Error::config("OPENAI_API_KEY not set");
        assert!(matches!(err, Error::Config(_)));

        let err = Error::insufficient_output(Stage::Topics, 1, 3);
        assert!(matches!(
            err,
            Error::InsufficientOutput { got: 1, need: 3, .. }
        ));
    }

    #[test]
    fn test_gate_error_display() {
        let err = Error::insufficient_output(Stage::Outline, 2, 3);
        assert_eq!(
            err.to_string(),
            "insufficient output from outline stage: got 2, need at least 3"
        );

        assert_eq!(
            Error::NoEffectiveChange.to_string(),
            "no meaningful edits were made to the content"
        );
    }

    #[test]
    fn test_model_error_helpers() {
        let err = ModelError::status(429, "rate limited");
        assert_eq!(err.to_string(), "HTTP 429: rate limited");

        let err = ModelError::format("missing choices");
        assert!(matches!(err, ModelError::Format(_)));
    }
}
