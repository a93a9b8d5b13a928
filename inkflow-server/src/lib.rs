//! HTTP delivery surface for the inkflow pipeline.
//!
//! One endpoint: `GET /generate-blog/stream?domain=...&target_audience=...`
//! runs the four stages for the request and pushes each stage's result to
//! the client as a server-sent event, ending after the final content, a
//! terminal error, or a client disconnect.

pub mod routes;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use inkflow::BlogPipeline;
use inkflow::providers::CompletionModel;
use std::net::SocketAddr;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// Result type alias for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Error type for server startup.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ServerError {
    /// Invalid server configuration.
    #[error("config: {0}")]
    Config(String),

    /// Socket-level failure.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Origins the CORS layer allows.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

/// Build the application router around one shared pipeline.
///
/// The pipeline handle is read-only shared state; every request gets its own
/// run with its own intermediate values.
#[must_use]
pub fn router<M>(pipeline: BlogPipeline<M>, config: &ServerConfig) -> Router
where
    M: CompletionModel + Clone + Send + Sync + 'static,
{
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin, "skipping unparseable CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    routes::blog_routes(pipeline).layer(cors)
}

/// Bind the listener and serve until the process is stopped.
///
/// # Errors
///
/// Returns an error if the bind address is invalid or the socket cannot be
/// bound.
pub async fn start_server<M>(config: &ServerConfig, pipeline: BlogPipeline<M>) -> Result<()>
where
    M: CompletionModel + Clone + Send + Sync + 'static,
{
    let app = router(pipeline, config);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| ServerError::Config(format!("invalid address: {e}")))?;

    info!("starting blog generation server on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.allowed_origins, vec!["http://localhost:3000"]);
    }
}
