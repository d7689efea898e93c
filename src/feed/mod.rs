// src/feed/mod.rs
// =============================================================================
// The repository feed: everything between "GitHub answered" and "here are the
// cards to draw".
//
// Submodules:
// - model: RemoteRepoRecord (as received) and DisplayRepo (normalized)
// - pipeline: validate -> drop forks -> fill defaults -> keep first 6
// - loader: runs the pipeline once and publishes Pending / Loaded / Failed
// =============================================================================

mod loader;
mod model;
mod pipeline;

pub use loader::{FeedLoader, FeedState};
pub use model::DisplayRepo;

#[cfg(test)]
pub use loader::LOAD_ERROR_MESSAGE;
