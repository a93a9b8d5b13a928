//! `OpenAI` Chat Completions provider.
//!
//! Works against OpenAI's official API as well as compatible endpoints
//! (Azure `OpenAI`, local proxies) via a custom base URL.

mod client;
mod completion;

pub use client::{OPENAI_API_BASE_URL, OpenAIClient, OpenAIClientBuilder};
pub use completion::ChatModel;
