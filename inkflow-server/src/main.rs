//! Inkflow server - streams blog generation stages over SSE.

use clap::Parser;
use inkflow::prelude::*;
use inkflow_server::{ServerConfig, start_server};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Inkflow server - incremental blog generation over HTTP
#[derive(Parser, Debug)]
#[command(name = "inkflow-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    /// Model name
    #[arg(short, long, env = "INKFLOW_MODEL", default_value = "gpt-3.5-turbo")]
    model: String,

    /// Frontend origin allowed by CORS (repeatable)
    #[arg(long = "allow-origin", default_value = "http://localhost:3000")]
    allowed_origins: Vec<String>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");

    match rt.block_on(run(args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging with the given verbosity level.
fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbosity {
            0 => "inkflow=info,inkflow_server=info",
            1 => "inkflow=debug,inkflow_server=debug",
            _ => "debug",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .init();
}

async fn run(args: Args) -> anyhow::Result<()> {
    let client = OpenAIClient::from_env()?;
    let pipeline = BlogPipeline::new(client.chat_model(&args.model));

    let config = ServerConfig {
        host: args.host,
        port: args.port,
        allowed_origins: args.allowed_origins,
    };

    start_server(&config, pipeline).await?;
    Ok(())
}
