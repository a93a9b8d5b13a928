//! The four-stage blog-generation pipeline.
//!
//! [`BlogPipeline`] wraps a completion model and exposes the stages in their
//! required call order: [`generate_topics`](BlogPipeline::generate_topics) →
//! [`create_outline`](BlogPipeline::create_outline) →
//! [`write_content`](BlogPipeline::write_content) →
//! [`polish_content`](BlogPipeline::polish_content).
//!
//! Each stage is one prompt, one completion call, one parse, and one gate
//! check: no retries, no branching, no state carried between operations.
//! Sequencing (and deciding to stop after a gate failure) is the caller's
//! job; see [`stream::stage_events`] for the incremental-delivery driver.

pub mod events;
mod outline;
mod prompts;
pub mod stream;

pub use outline::{Outline, OutlineSection};

use crate::error::{Error, Result};
use crate::providers::CompletionModel;
use std::fmt;
use tracing::{debug, instrument, warn};

/// Minimum topic count accepted by the generation gate.
const MIN_TOPICS: usize = 3;

/// Minimum section count accepted by the outline gate.
const MIN_SECTIONS: usize = 3;

/// Minimum whitespace-delimited word count accepted by the content gate.
const MIN_WORDS: usize = 300;

/// The four pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Topic generation.
    Topics,
    /// Outline creation.
    Outline,
    /// Content drafting.
    Content,
    /// Content polishing.
    Polish,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Topics => "topics",
            Self::Outline => "outline",
            Self::Content => "content",
            Self::Polish => "polish",
        };
        write!(f, "{name}")
    }
}

/// The staged blog-generation engine.
///
/// Generic over the completion model so engines with different credentials
/// (or a scripted [`MockModel`](crate::providers::MockModel)) can coexist;
/// the model handle is the only state and is never mutated.
#[derive(Clone)]
pub struct BlogPipeline<M> {
    model: M,
}

impl<M> fmt::Debug for BlogPipeline<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlogPipeline").finish_non_exhaustive()
    }
}

impl<M: CompletionModel> BlogPipeline<M> {
    /// Create a pipeline around the given completion model.
    #[must_use]
    pub const fn new(model: M) -> Self {
        Self { model }
    }

    /// Run one completion call, mapping any provider failure to an empty
    /// response. The failure itself stays visible in the logs; downstream,
    /// an empty response is rejected by the same gates as a useless one.
    async fn completion(&self, prompt: &str) -> String {
        match self.model.complete(prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    provider = self.model.provider(),
                    error = %e,
                    "completion call failed, treating response as empty"
                );
                String::new()
            }
        }
    }

    /// Stage 1: generate candidate blog topics for a domain and audience.
    ///
    /// Topics are the trimmed non-blank lines of the response, in order of
    /// appearance.
    ///
    /// # Errors
    ///
    /// [`Error::InsufficientOutput`] if fewer than three topics result; the
    /// run must stop.
    #[instrument(skip(self))]
    pub async fn generate_topics(&self, domain: &str, audience: &str) -> Result<Vec<String>> {
        let response = self.completion(&prompts::topics(domain, audience)).await;

        let topics: Vec<String> = response
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        if topics.len() < MIN_TOPICS {
            return Err(Error::insufficient_output(
                Stage::Topics,
                topics.len(),
                MIN_TOPICS,
            ));
        }

        debug!(count = topics.len(), "topics generated");
        Ok(topics)
    }

    /// Stage 2: create a structured outline for the chosen topic.
    ///
    /// # Errors
    ///
    /// [`Error::InsufficientOutput`] if the outline has fewer than three
    /// sections.
    #[instrument(skip(self))]
    pub async fn create_outline(&self, topic: &str) -> Result<Outline> {
        let response = self.completion(&prompts::outline(topic)).await;
        let outline = Outline::parse(&response);

        if outline.len() < MIN_SECTIONS {
            return Err(Error::insufficient_output(
                Stage::Outline,
                outline.len(),
                MIN_SECTIONS,
            ));
        }

        debug!(sections = outline.len(), "outline created");
        Ok(outline)
    }

    /// Stage 3: draft the post, one completion call per outline section.
    ///
    /// Each section's text is prefixed with its heading and the blocks are
    /// joined with blank-line separators, in outline order.
    ///
    /// # Errors
    ///
    /// [`Error::InsufficientOutput`] if the assembled draft has fewer than
    /// 300 whitespace-delimited words.
    #[instrument(skip(self, outline), fields(sections = outline.len()))]
    pub async fn write_content(&self, outline: &Outline) -> Result<String> {
        let mut blocks = Vec::with_capacity(outline.len());

        for section in outline.sections() {
            let body = self.completion(&prompts::section(&section.points)).await;
            blocks.push(format!("\n{}\n{}", section.heading, body));
        }

        let content = blocks.join("\n");
        let words = content.split_whitespace().count();

        if words < MIN_WORDS {
            return Err(Error::insufficient_output(Stage::Content, words, MIN_WORDS));
        }

        debug!(words, "draft assembled");
        Ok(content)
    }

    /// Stage 4: have the model edit the draft for clarity, grammar and flow.
    ///
    /// # Errors
    ///
    /// [`Error::NoEffectiveChange`] if the output equals the input after
    /// trimming surrounding whitespace.
    #[instrument(skip(self, content), fields(words = content.split_whitespace().count()))]
    pub async fn polish_content(&self, content: &str) -> Result<String> {
        let polished = self.completion(&prompts::polish(content)).await;

        if polished.trim() == content.trim() {
            return Err(Error::NoEffectiveChange);
        }

        debug!("content polished");
        Ok(polished)
    }
}
