//! Completion providers for the pipeline.
//!
//! The pipeline treats the language model as an opaque text-in/text-out
//! function. Each provider implements [`CompletionModel`], so engines can be
//! constructed against the real API or against a scripted stand-in.
//!
//! # Example
//!
//! ```rust,ignore
//! use inkflow::providers::openai::OpenAIClient;
//! use inkflow::providers::FromEnv;
//!
//! let client = OpenAIClient::from_env()?;
//! let model = client.chat_model("gpt-3.5-turbo");
//! ```

pub mod mock;
pub mod openai;

pub use mock::MockModel;
pub use openai::OpenAIClient;

use crate::error::ModelError;
use async_trait::async_trait;
use reqwest::header::HeaderMap;

/// The core trait for text-completion implementations.
///
/// One operation: send a prompt, get the model's text back. The polish stage
/// embeds an entire draft in its prompt, so implementations must tolerate
/// arbitrarily large prompt text.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Get the model identifier (e.g., "gpt-3.5-turbo").
    fn model_id(&self) -> &str;

    /// Get the provider name (e.g., "openai", "mock").
    fn provider(&self) -> &'static str {
        "unknown"
    }

    /// Send a prompt and return the model's raw text response.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails or the response cannot be
    /// parsed. The pipeline converts any such error into an empty response;
    /// providers should not do that conversion themselves.
    async fn complete(&self, prompt: &str) -> Result<String, ModelError>;
}

/// Trait for clients that can be created from environment variables.
pub trait FromEnv: Sized {
    /// Create a new client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if a required variable
    /// is not set.
    fn from_env() -> crate::Result<Self>;
}

/// Base configuration for HTTP-backed API clients.
pub trait ApiClient: Clone + Send + Sync {
    /// Get the base URL for API requests.
    fn base_url(&self) -> &str;

    /// Get the HTTP client instance.
    fn http_client(&self) -> &reqwest::Client;

    /// Build authentication headers for API requests.
    fn auth_headers(&self) -> HeaderMap;
}
