//! Inkflow CLI - generate one blog post from the command line.
//!
//! Runs the four pipeline stages to completion, printing each intermediate
//! result as it lands. A gate failure prints the error and exits nonzero;
//! nothing is retried.

#![allow(clippy::print_stdout, clippy::print_stderr)] // CLI program intentionally prints

use clap::Parser;
use inkflow::prelude::*;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Inkflow - staged blog-post generation
#[derive(Parser, Debug)]
#[command(name = "inkflow")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Subject area for the post
    #[arg(short, long, default_value = "artificial intelligence")]
    domain: String,

    /// Intended audience for the post
    #[arg(short, long, default_value = "business professionals")]
    audience: String,

    /// Model name
    #[arg(short, long, env = "INKFLOW_MODEL", default_value = "gpt-3.5-turbo")]
    model: String,

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
            eprintln!("Error in blog generation process: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging with the given verbosity level.
fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbosity {
            0 => "inkflow=warn",
            1 => "inkflow=debug",
            _ => "debug",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .init();
}

async fn run(args: Args) -> inkflow::Result<()> {
    let client = OpenAIClient::from_env()?;
    let pipeline = BlogPipeline::new(client.chat_model(&args.model));

    let topics = pipeline
        .generate_topics(&args.domain, &args.audience)
        .await?;
    println!("Generated topics:");
    for (i, topic) in topics.iter().enumerate() {
        println!("  {}. {topic}", i + 1);
    }

    let chosen_topic = topics
        .first()
        .expect("gate guarantees at least three topics");
    println!("\nChosen topic: {chosen_topic}");

    let outline = pipeline.create_outline(chosen_topic).await?;
    println!("\nOutline:\n{outline}");

    let content = pipeline.write_content(&outline).await?;
    println!("\nInitial content:\n{content}");

    let final_content = pipeline.polish_content(&content).await?;
    println!("\nFinal content:\n{final_content}");

    Ok(())
}
