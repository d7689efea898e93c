// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands, both load the feed exactly once:
// - show:   print the projects as a table (or JSON with --json)
// - render: write the HTML projects section to a file or stdout
//
// Global flags (--account, --config) can go before or after the subcommand.
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "repo-showcase",
    version,
    about = "Builds the projects feed of a portfolio page from a GitHub account",
    long_about = "repo-showcase lists a GitHub account's most recently updated repositories, \
                  skips forks, and shows up to six of them as project cards. \
                  If GitHub can't be reached it shows a placeholder project instead."
)]
pub struct Cli {
    /// GitHub account whose repositories are listed (overrides config)
    #[arg(long, global = true)]
    pub account: Option<String>,

    /// Path to a TOML config file
    /// (default: $XDG_CONFIG_HOME/repo-showcase/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the projects feed
    ///
    /// Example: repo-showcase show --json
    Show {
        /// Output the feed state as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Render the HTML "My Projects" section
    ///
    /// Example: repo-showcase render --output projects.html
    Render {
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Emit only the <section> fragment, not a full document
        #[arg(long)]
        fragment: bool,
    },
}
