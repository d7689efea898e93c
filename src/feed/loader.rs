// src/feed/loader.rs
// =============================================================================
// The repository feed loader.
//
// A loader is created Pending and settles exactly once:
//
//     Pending --(listing loaded)--> Loaded { repositories }
//     Pending --(any failure)-----> Failed { message, repositories: [placeholder] }
//
// Both end states are final for the lifetime of the loader. Calling load()
// again returns the settled state without touching the network.
//
// Every failure (unreachable host, 403 rate limit, a body that isn't an
// array) collapses into the same user-facing message and the same placeholder
// card. The cause is only logged.
//
// The state lives in a tokio watch channel, so a presentation layer can
// subscribe() and re-render when the single transition happens.
// =============================================================================

use super::model::DisplayRepo;
use super::pipeline::{parse_listing, prepare};
use crate::error::Result;
use crate::github::RepoSource;
use chrono::Utc;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load repositories. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedState {
    Pending,
    Loaded {
        repositories: Vec<DisplayRepo>,
    },
    Failed {
        message: String,
        repositories: Vec<DisplayRepo>,
    },
}

impl FeedState {
    pub fn repositories(&self) -> &[DisplayRepo] {
        match self {
            FeedState::Pending => &[],
            FeedState::Loaded { repositories } | FeedState::Failed { repositories, .. } => {
                repositories.as_slice()
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FeedState::Pending)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FeedState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    /// The three values the page reads, taken together from one state
    pub fn snapshot(&self) -> FeedSnapshot<'_> {
        FeedSnapshot {
            repositories: self.repositories(),
            is_loading: self.is_loading(),
            error_message: self.error_message(),
        }
    }

    fn failed() -> Self {
        FeedState::Failed {
            message: LOAD_ERROR_MESSAGE.to_string(),
            repositories: vec![DisplayRepo::placeholder(Utc::now())],
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSnapshot<'a> {
    pub repositories: &'a [DisplayRepo],
    pub is_loading: bool,
    pub error_message: Option<&'a str>,
}

pub struct FeedLoader<S> {
    source: S,
    state: watch::Sender<FeedState>,
    started: AtomicBool,
}

impl<S: RepoSource> FeedLoader<S> {
    pub fn new(source: S) -> Self {
        let (state, _) = watch::channel(FeedState::Pending);
        Self {
            source,
            state,
            started: AtomicBool::new(false),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> FeedState {
        self.state.borrow().clone()
    }

    /// Runs the load on first call; later calls wait for and return the
    /// settled state.
    pub async fn load(&self) -> FeedState {
        if self.started.swap(true, Ordering::SeqCst) {
            let mut rx = self.subscribe();
            return match rx.wait_for(FeedState::is_settled).await {
                Ok(state) => state.clone(),
                Err(_) => self.state(),
            };
        }

        let next = match self.fetch().await {
            Ok(repositories) => {
                tracing::info!(count = repositories.len(), "repositories loaded");
                FeedState::Loaded { repositories }
            }
            Err(e) => {
                tracing::error!("Error fetching GitHub repos: {}", e);
                FeedState::failed()
            }
        };

        self.state.send_replace(next.clone());
        next
    }

    async fn fetch(&self) -> Result<Vec<DisplayRepo>> {
        let raw = self.source.fetch_listing().await?;
        let records = parse_listing(&raw)?;
        let total = records.len();
        let repositories = prepare(records);
        tracing::debug!(total, kept = repositories.len(), "listing filtered");
        Ok(repositories)
    }
}
