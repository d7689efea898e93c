// src/error.rs
// =============================================================================
// Error types for loading the repository feed.
//
// Three ways a load can go wrong:
// - Fetch: GitHub answered, but with a non-success status (403 rate limit, 404...)
// - Format: GitHub answered 2xx, but the body is not an array of repositories
// - Transport: the request never completed (DNS, connection refused, timeout)
//
// None of these escape the feed loader: it logs them and publishes the
// fallback placeholder instead. The application layer (main.rs) uses anyhow
// for everything else, like the config and output errors.
// =============================================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("GitHub API error: {status}")]
    Fetch { status: u16 },

    #[error("invalid data format from GitHub API: {0}")]
    Format(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, FeedError>;
