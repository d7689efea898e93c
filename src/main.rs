// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (tracing, to stderr so stdout stays clean for JSON/HTML)
// 2. Parse command-line arguments and load the config
// 3. Load the repository feed exactly once
// 4. Print or render it
// 5. Exit with proper code (0 = feed loaded, 1 = placeholder shown, 2 = error)
//
// A failed GitHub request is *not* an error at this level: the feed loader
// already turned it into the placeholder card, which still gets rendered.
// =============================================================================

mod cli;
mod config;
mod error;
mod feed;
mod github;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use feed::{FeedLoader, FeedState};
use github::GitHubSource;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_logging();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Log level comes from RUST_LOG (e.g. RUST_LOG=repo_showcase=debug),
// defaulting to warnings only
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok();
}

// Returns:
//   Ok(0) = feed loaded from GitHub
//   Ok(1) = GitHub failed, placeholder shown
//   Err   = config, client or output error
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = Config::load(cli.config, cli.account);
    tracing::debug!(?config, "configuration loaded");

    let source = GitHubSource::new(&config)?;
    tracing::info!(url = %source.endpoint(), "loading repositories");

    let loader = FeedLoader::new(source);
    let state = loader.load().await;

    match cli.command {
        Commands::Show { json } => print_feed(&state, json)?,
        Commands::Render { output, fragment } => {
            let html = if fragment {
                render::render_section(&state)
            } else {
                render::render_page(&state, &config.account)
            };
            write_output(output.as_deref(), &html)?;
        }
    }

    Ok(exit_code(&state))
}

fn print_feed(state: &FeedState, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(&state.snapshot())?;
        println!("{}", json_output);
    } else {
        print!("{}", render::format_table(state));
    }
    Ok(())
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("📄 Wrote {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

fn exit_code(state: &FeedState) -> i32 {
    if state.error_message().is_some() {
        1
    } else {
        0
    }
}
