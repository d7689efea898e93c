// src/feed/model.rs
// =============================================================================
// The two shapes a repository takes on its way to the page.
//
// - RemoteRepoRecord: one element of GitHub's listing, as received.
//   Only the fields we show are declared; serde ignores the other ~70.
// - DisplayRepo: the same record after normalization. description, language
//   and homepage are always present, so the renderers never deal with Option.
//
// Defaults (an empty string counts as missing too):
//   description -> "No description provided"
//   language    -> "Unknown"
//   homepage    -> ""   (empty means "no demo link")
// =============================================================================

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const NO_DESCRIPTION: &str = "No description provided";
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRepoRecord {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    #[serde(default)]
    pub topics: Vec<String>,
    pub updated_at: String,
    #[serde(default)]
    pub fork: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRepo {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub html_url: String,
    pub homepage: String,
    pub language: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub topics: Vec<String>,
    pub updated_at: String,
    pub fork: bool,
}

impl DisplayRepo {
    /// The synthetic card shown when the listing could not be loaded
    pub fn placeholder(now: DateTime<Utc>) -> Self {
        Self {
            id: 1,
            name: "example-repo".to_string(),
            description: "Example repository showing when API fails".to_string(),
            html_url: "#".to_string(),
            homepage: String::new(),
            language: "TypeScript".to_string(),
            stargazers_count: 0,
            forks_count: 0,
            topics: vec!["example".to_string()],
            updated_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            fork: false,
        }
    }

    pub fn has_demo(&self) -> bool {
        !self.homepage.is_empty()
    }
}

impl From<RemoteRepoRecord> for DisplayRepo {
    fn from(record: RemoteRepoRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: or_default(record.description, NO_DESCRIPTION),
            html_url: record.html_url,
            homepage: or_default(record.homepage, ""),
            language: or_default(record.language, UNKNOWN_LANGUAGE),
            stargazers_count: record.stargazers_count,
            forks_count: record.forks_count,
            topics: record.topics,
            updated_at: record.updated_at,
            fork: record.fork,
        }
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
