//! Blog generation endpoint with SSE streaming.

use axum::Router;
use axum::extract::{Query, State};
use axum::response::sse::{Event, Sse};
use axum::routing::get;
use futures::{Stream, StreamExt};
use inkflow::BlogPipeline;
use inkflow::pipeline::stream::stage_events;
use inkflow::providers::CompletionModel;
use serde::Deserialize;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::debug;

/// Query parameters for a generation request.
#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    /// Subject area for the post.
    pub domain: String,
    /// Intended audience for the post.
    pub target_audience: String,
}

/// Routes served by this crate.
#[must_use]
pub fn blog_routes<M>(pipeline: BlogPipeline<M>) -> Router
where
    M: CompletionModel + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/generate-blog/stream", get(generate_blog::<M>))
        .with_state(pipeline)
}

/// Run the pipeline for one request, forwarding each stage event as one SSE
/// message.
async fn generate_blog<M>(
    State(pipeline): State<BlogPipeline<M>>,
    Query(params): Query<GenerateParams>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>>
where
    M: CompletionModel + Clone + Send + Sync + 'static,
{
    debug!(
        domain = %params.domain,
        audience = %params.target_audience,
        "starting streamed generation run"
    );

    // Capacity 1: at most one outstanding event between pipeline and client.
    let (tx, rx) = mpsc::channel(1);

    // The stages run on their own task so an in-flight completion call
    // always finishes; a disconnect is noticed at the next stage boundary,
    // when the probe sees the receiver side gone.
    let probe = {
        let tx = tx.clone();
        move || tx.is_closed()
    };
    let events = stage_events(pipeline, params.domain, params.target_audience, probe);

    tokio::spawn(async move {
        futures::pin_mut!(events);
        while let Some(event) = events.next().await {
            if tx.send(event).await.is_err() {
                break;
            }
        }
    });

    let stream = ReceiverStream::new(rx).map(|event| Event::default().json_data(&event));
    Sse::new(stream)
}
