// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Building the "list repositories for a user" endpoint
//   (sorted by most recently updated, one page of 6)
// - A RepoSource trait: "give me the raw listing response"
// - GitHubSource: the reqwest-backed implementation of RepoSource
//
// The source deliberately knows nothing about forks, defaults or fallbacks.
// It hands back the status code and body exactly as received; the feed
// module decides what they mean.
// =============================================================================

mod fetch;

pub use fetch::{GitHubSource, RawListing, RepoSource};

#[cfg(test)]
pub use fetch::MockRepoSource;
