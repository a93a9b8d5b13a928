//! Scripted completion model for tests and offline development.

use crate::error::ModelError;
use crate::providers::CompletionModel;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One scripted reply.
#[derive(Debug, Clone)]
enum Reply {
    Text(String),
    Failure,
}

/// A completion model that replays scripted responses in order.
///
/// Every call to [`complete`](CompletionModel::complete) pops the next
/// scripted reply and records the prompt it was asked, so tests can assert
/// both what the pipeline produced and what it sent. Clones share the same
/// script and prompt log.
///
/// # Example
///
/// ```rust,ignore
/// let model = MockModel::new()
///     .with_response("Topic A\nTopic B\nTopic C");
/// let pipeline = BlogPipeline::new(model);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockModel {
    script: Arc<Mutex<VecDeque<Reply>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockModel {
    /// Create a new mock with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a successful response to the script.
    #[must_use]
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.push_response(text);
        self
    }

    /// Append a failing call to the script.
    #[must_use]
    pub fn with_failure(self) -> Self {
        self.push_failure();
        self
    }

    /// Append a successful response to the script of an existing mock.
    pub fn push_response(&self, text: impl Into<String>) {
        self.script
            .lock()
            .expect("mock script lock poisoned")
            .push_back(Reply::Text(text.into()));
    }

    /// Append a failing call to the script of an existing mock.
    pub fn push_failure(&self) {
        self.script
            .lock()
            .expect("mock script lock poisoned")
            .push_back(Reply::Failure);
    }

    /// All prompts received so far, in call order.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .expect("mock prompt lock poisoned")
            .clone()
    }
}

#[async_trait]
impl CompletionModel for MockModel {
    fn model_id(&self) -> &str {
        "mock"
    }

    fn provider(&self) -> &'static str {
        "mock"
    }

    async fn complete(&self, prompt: &str) -> Result<String, ModelError> {
        self.prompts
            .lock()
            .expect("mock prompt lock poisoned")
            .push(prompt.to_string());

        let reply = self
            .script
            .lock()
            .expect("mock script lock poisoned")
            .pop_front();

        match reply {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::Failure) => Err(ModelError::format("scripted failure")),
            None => Err(ModelError::format("no scripted response left")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replies_in_order() {
        let model = MockModel::new().with_response("one").with_response("two");

        assert_eq!(model.complete("a").await.expect("scripted"), "one");
        assert_eq!(model.complete("b").await.expect("scripted"), "two");
        assert!(model.complete("c").await.is_err());
    }

    #[tokio::test]
    async fn test_scripted_failure() {
        let model = MockModel::new().with_failure();
        let err = model.complete("a").await.expect_err("scripted failure");
        assert!(matches!(err, ModelError::Format(_)));
    }

    #[tokio::test]
    async fn test_records_prompts() {
        let model = MockModel::new().with_response("ok");
        let clone = model.clone();

        clone.complete("what was asked").await.expect("scripted");
        assert_eq!(model.prompts(), vec!["what was asked".to_string()]);
    }
}
