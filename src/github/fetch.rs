// src/github/fetch.rs
// =============================================================================
// This module fetches the repository listing for one GitHub account.
//
// Strategy:
// - Build https://api.github.com/users/<account>/repos?sort=updated&per_page=6
// - Send one anonymous GET (no token, so the 60 req/hour anonymous limit applies)
// - Return the status code and body without interpreting them
//
// Why return the raw body instead of parsed repos?
// - GitHub answers rate limiting with 403 and a JSON *object*, not an array
// - Deciding what counts as a valid listing is the feed loader's job
// - It also keeps this seam small enough to mock in tests
// =============================================================================

use crate::config::Config;
use crate::error::Result;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use url::Url;

/// Page size requested from GitHub
const PER_PAGE: usize = 6;

/// The listing response exactly as GitHub sent it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawListing {
    pub status: u16,
    pub body: String,
}

impl RawListing {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can produce a repository listing.
///
/// Only transport failures are errors here; a 403 or 500 is still a
/// successfully received `RawListing`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepoSource: Send + Sync {
    async fn fetch_listing(&self) -> Result<RawListing>;
}

/// RepoSource backed by the real GitHub API
pub struct GitHubSource {
    client: Client,
    endpoint: Url,
}

impl GitHubSource {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let endpoint = listing_url(&config.api_base, &config.account)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        // No timeout unless configured: the client default applies
        let mut builder = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("failed to create HTTP client")?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RepoSource for GitHubSource {
    async fn fetch_listing(&self) -> Result<RawListing> {
        tracing::debug!(url = %self.endpoint, "requesting repository listing");

        let response = self.client.get(self.endpoint.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(status, bytes = body.len(), "repository listing received");
        Ok(RawListing { status, body })
    }
}

/// Builds the listing endpoint for `account` under `api_base`
///
/// Example:
///   listing_url("https://api.github.com", "octocat")
///   -> https://api.github.com/users/octocat/repos?sort=updated&per_page=6
pub fn listing_url(api_base: &str, account: &str) -> anyhow::Result<Url> {
    if account.trim().is_empty() {
        return Err(anyhow!("GitHub account must not be empty"));
    }

    let mut url = Url::parse(api_base)
        .map_err(|e| anyhow!("Invalid API base URL '{}': {}", api_base, e))?;

    url.path_segments_mut()
        .map_err(|_| anyhow!("API base URL cannot have a path: {}", api_base))?
        .pop_if_empty()
        .extend(&["users", account, "repos"]);

    url.query_pairs_mut()
        .clear()
        .append_pair("sort", "updated")
        .append_pair("per_page", &PER_PAGE.to_string());

    Ok(url)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why #[async_trait]?
//    - Traits with async fns need boxing to be used behind a generic or dyn
//    - async_trait rewrites `async fn` into a method returning a boxed future
//
// 2. What does #[cfg_attr(test, mockall::automock)] do?
//    - Only in test builds, mockall generates MockRepoSource
//    - Tests set expectations on it instead of calling GitHub
//
// 3. Why is a 403 not an Err here?
//    - reqwest only fails when no response arrives at all
//    - Any status code, good or bad, is a successful HTTP exchange
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FeedError;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    // Serves exactly one canned HTTP response and hands back the raw request
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            String::from_utf8_lossy(&request).to_string()
        });

        (base, handle)
    }

    fn config_for(api_base: &str) -> Config {
        Config {
            api_base: api_base.to_string(),
            account: "octocat".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_listing_url() {
        let url = listing_url("https://api.github.com", "JuanCervantesAla").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/users/JuanCervantesAla/repos?sort=updated&per_page=6"
        );
    }

    #[test]
    fn test_listing_url_with_trailing_slash() {
        let url = listing_url("http://localhost:8080/", "octocat").unwrap();
        assert_eq!(url.path(), "/users/octocat/repos");
    }

    #[test]
    fn test_listing_url_rejects_bad_input() {
        assert!(listing_url("not a url", "octocat").is_err());
        assert!(listing_url("https://api.github.com", "  ").is_err());
        assert!(listing_url("mailto:someone@example.com", "octocat").is_err());
    }

    #[tokio::test]
    async fn test_fetch_returns_status_and_body() {
        let (base, server) = serve_once("200 OK", "[]").await;
        let source = GitHubSource::new(&config_for(&base)).unwrap();

        let listing = source.fetch_listing().await.unwrap();
        assert_eq!(listing, RawListing { status: 200, body: "[]".to_string() });
        assert!(listing.is_success());

        let request = server.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /users/octocat/repos?sort=updated&per_page=6 http/1.1"));
        assert!(request.contains("user-agent: repo-showcase/"));
        assert!(request.contains("accept: application/vnd.github+json"));
        assert!(!request.contains("authorization:"));
    }

    #[tokio::test]
    async fn test_fetch_keeps_error_status() {
        let body = r#"{"message":"API rate limit exceeded"}"#;
        let (base, server) = serve_once("403 Forbidden", body).await;
        let source = GitHubSource::new(&config_for(&base)).unwrap();

        let listing = source.fetch_listing().await.unwrap();
        assert_eq!(listing.status, 403);
        assert_eq!(listing.body, body);
        assert!(!listing.is_success());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Grab a free port, then close it again so nothing is listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let source = GitHubSource::new(&config_for(&base)).unwrap();
        let result = source.fetch_listing().await;
        assert!(matches!(result, Err(FeedError::Transport(_))));
    }
}
