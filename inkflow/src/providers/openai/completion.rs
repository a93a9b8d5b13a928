//! `OpenAI` Chat Completions API implementation.
//!
//! Implements [`CompletionModel`] over the `/chat/completions` endpoint: one
//! user message in, the first choice's text out.

use super::client::OpenAIClient;
use crate::error::ModelError;
use crate::providers::{ApiClient, CompletionModel};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

/// Default sampling temperature for blog generation.
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// `OpenAI` chat-completion model.
#[derive(Clone)]
pub struct ChatModel {
    client: OpenAIClient,
    model_id: String,
    /// Sampling temperature sent with every request.
    pub temperature: f32,
    /// Optional cap on generated tokens.
    pub max_tokens: Option<u32>,
}

impl std::fmt::Debug for ChatModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatModel")
            .field("model_id", &self.model_id)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish_non_exhaustive()
    }
}

impl ChatModel {
    /// Create a new chat-completion model.
    pub(crate) fn new(client: OpenAIClient, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: None,
        }
    }

    /// Set the sampling temperature.
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the maximum number of tokens to generate.
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Build the request body for the API.
    fn build_request_body(&self, prompt: &str) -> Value {
        let mut body = serde_json::json!({
            "model": self.model_id,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": self.temperature,
        });

        if let Some(max_tokens) = self.max_tokens {
            body["max_tokens"] = serde_json::json!(max_tokens);
        }

        body
    }

    /// Pull the first choice's message text out of the API response.
    fn parse_response(json: &Value) -> Result<String, ModelError> {
        json["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| ModelError::format("no message content in first choice"))
    }
}

#[async_trait]
impl CompletionModel for ChatModel {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn provider(&self) -> &'static str {
        "openai"
    }

    #[instrument(skip(self, prompt), fields(model = %self.model_id, prompt_len = prompt.len()))]
    async fn complete(&self, prompt: &str) -> Result<String, ModelError> {
        let body = self.build_request_body(prompt);
        let url = format!("{}/chat/completions", self.client.base_url());

        debug!("sending chat completion request");

        let response = self
            .client
            .http_client()
            .post(&url)
            .headers(self.client.auth_headers())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ModelError::status(status, error_text));
        }

        let json: Value = response.json().await?;
        Self::parse_response(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> ChatModel {
        OpenAIClient::new("test-key")
            .expect("client should build")
            .chat_model("gpt-3.5-turbo")
    }

    #[test]
    fn test_request_body_shape() {
        let body = model().build_request_body("Write something.");

        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "Write something.");
        assert!((body["temperature"].as_f64().expect("temperature") - 0.7).abs() < 1e-6);
        assert!(body.get("max_tokens").is_none());
    }

    #[test]
    fn test_request_body_with_max_tokens() {
        let body = model()
            .with_max_tokens(512)
            .build_request_body("Write something.");
        assert_eq!(body["max_tokens"], 512);
    }

    #[test]
    fn test_parse_response_extracts_first_choice() {
        let json = serde_json::json!({
            "choices": [
                { "message": { "role": "assistant", "content": "Hello there" } },
                { "message": { "role": "assistant", "content": "ignored" } }
            ]
        });

        let text = ChatModel::parse_response(&json).expect("content present");
        assert_eq!(text, "Hello there");
    }

    #[test]
    fn test_parse_response_missing_content() {
        let json = serde_json::json!({ "choices": [] });
        let err = ChatModel::parse_response(&json).expect_err("no content");
        assert!(matches!(err, ModelError::Format(_)));
    }
}
