//! Inkflow turns a domain and target audience into a polished blog post
//! through a fixed four-stage prompt chain (topic generation, outline
//! creation, content drafting, polishing) with a minimal quality gate
//! after each stage.
//!
//! The same sequence is available two ways: drive
//! [`pipeline::BlogPipeline`]'s operations directly (one result per stage),
//! or consume [`pipeline::stream::stage_events`], a lazy stream of tagged
//! per-stage events suited to incremental delivery over SSE or any other
//! push transport.
//!
//! ```rust,ignore
//! use inkflow::prelude::*;
//!
//! let client = OpenAIClient::from_env()?;
//! let pipeline = BlogPipeline::new(client.chat_model("gpt-3.5-turbo"));
//!
//! let topics = pipeline.generate_topics("ai", "engineers").await?;
//! let outline = pipeline.create_outline(&topics[0]).await?;
//! let draft = pipeline.write_content(&outline).await?;
//! let post = pipeline.polish_content(&draft).await?;
//! ```

pub mod error;
pub mod pipeline;
pub mod prelude;
pub mod providers;

pub use error::{Error, ModelError, Result};
pub use pipeline::{BlogPipeline, Outline, OutlineSection, Stage};
