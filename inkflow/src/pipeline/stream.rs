//! Lazy stage-event generator for streaming transports.
//!
//! [`stage_events`] runs the four stages in order and yields one
//! [`StageEvent`] per completed stage, so a transport layer can forward
//! results as they are produced instead of waiting for the whole run. The
//! stream is finite and non-restartable: it ends after `final_content`, after
//! a terminal `error`, or silently once the liveness probe reports the
//! consumer gone.

use super::BlogPipeline;
use super::events::StageEvent;
use crate::providers::CompletionModel;
use async_stream::stream;
use futures::Stream;
use tracing::debug;

/// Run one pipeline and yield its stage events.
///
/// `disconnected` is polled before every stage after the first; once it
/// returns `true` the stream ends without an error event. A stage that is
/// already in flight when the consumer goes away runs to completion; the
/// probe is only consulted at stage boundaries. After each yielded event the
/// generator briefly returns control to the scheduler so the transport can
/// flush before the next (potentially slow) completion call starts.
#[must_use]
pub fn stage_events<M, P>(
    pipeline: BlogPipeline<M>,
    domain: String,
    audience: String,
    disconnected: P,
) -> impl Stream<Item = StageEvent>
where
    M: CompletionModel,
    P: Fn() -> bool,
{
    stream! {
        let topics = match pipeline.generate_topics(&domain, &audience).await {
            Ok(topics) => topics,
            Err(e) => {
                yield StageEvent::error(&e);
                return;
            }
        };
        // The gate guarantees at least three topics; the first one drives
        // the rest of the run.
        let Some(topic) = topics.first().cloned() else {
            return;
        };
        yield StageEvent::Topics { topics };
        tokio::task::yield_now().await;

        if disconnected() {
            debug!("consumer disconnected, ending run");
            return;
        }
        let outline = match pipeline.create_outline(&topic).await {
            Ok(outline) => outline,
            Err(e) => {
                yield StageEvent::error(&e);
                return;
            }
        };
        yield StageEvent::Outline { outline: outline.clone(), topic };
        tokio::task::yield_now().await;

        if disconnected() {
            debug!("consumer disconnected, ending run");
            return;
        }
        let content = match pipeline.write_content(&outline).await {
            Ok(content) => content,
            Err(e) => {
                yield StageEvent::error(&e);
                return;
            }
        };
        yield StageEvent::InitialContent { content: content.clone() };
        tokio::task::yield_now().await;

        if disconnected() {
            debug!("consumer disconnected, ending run");
            return;
        }
        match pipeline.polish_content(&content).await {
            Ok(content) => yield StageEvent::FinalContent { content },
            Err(e) => yield StageEvent::error(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockModel;
    use futures::StreamExt;

    const TOPICS: &str = "Topic A\nTopic B\nTopic C";
    const OUTLINE: &str = "Intro\n  p1\nBody\n  p2\nConclusion\n  p3";

    /// A section body of `words` whitespace-delimited words.
    fn body(words: usize) -> String {
        "lorem ".repeat(words).trim_end().to_string()
    }

    /// Script the mock through topics, outline and the three section calls,
    /// returning the draft the content stage will assemble.
    fn script_through_content(model: &MockModel) -> String {
        model.push_response(TOPICS);
        model.push_response(OUTLINE);
        for _ in 0..3 {
            model.push_response(body(110));
        }

        let section = body(110);
        format!(
            "\nIntro\n{section}\n\nBody\n{section}\n\nConclusion\n{section}"
        )
    }

    async fn collect<P: Fn() -> bool>(model: MockModel, disconnected: P) -> Vec<StageEvent> {
        stage_events(
            BlogPipeline::new(model),
            "ai".into(),
            "engineers".into(),
            disconnected,
        )
        .collect()
        .await
    }

    #[tokio::test]
    async fn test_successful_run_emits_four_stage_events() {
        let model = MockModel::new();
        let draft = script_through_content(&model);
        model.push_response(format!("{draft} Polished."));

        let events = collect(model, || false).await;
        let names: Vec<_> = events.iter().map(StageEvent::name).collect();

        assert_eq!(
            names,
            vec!["topics", "outline", "initial_content", "final_content"]
        );
    }

    #[tokio::test]
    async fn test_outline_event_carries_chosen_topic() {
        let model = MockModel::new();
        let draft = script_through_content(&model);
        model.push_response(format!("{draft} Polished."));

        let events = collect(model, || false).await;
        let StageEvent::Outline { topic, outline } = &events[1] else {
            panic!("expected outline event, got {:?}", events[1]);
        };
        assert_eq!(topic, "Topic A");
        assert_eq!(outline.len(), 3);
    }

    #[tokio::test]
    async fn test_disconnect_after_topics_stops_silently() {
        let model = MockModel::new();
        script_through_content(&model);

        // Probe reports the consumer gone from the first boundary on.
        let events = collect(model.clone(), || true).await;

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name(), "topics");
        // Only the topic stage's completion call ever ran.
        assert_eq!(model.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_unchanged_polish_ends_with_error_event() {
        let model = MockModel::new();
        let draft = script_through_content(&model);
        model.push_response(draft);

        let events = collect(model, || false).await;
        let names: Vec<_> = events.iter().map(StageEvent::name).collect();

        assert_eq!(
            names,
            vec!["topics", "outline", "initial_content", "error"]
        );
        let StageEvent::Error { error } = &events[3] else {
            panic!("expected error event, got {:?}", events[3]);
        };
        assert_eq!(error, "no meaningful edits were made to the content");
    }

    #[tokio::test]
    async fn test_gate_failure_in_first_stage_is_single_error_event() {
        let model = MockModel::new().with_response("only one topic");

        let events = collect(model, || false).await;

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name(), "error");
    }
}
