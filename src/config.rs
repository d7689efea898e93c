// src/config.rs
// =============================================================================
// Configuration for the feed: which account to list, where the API lives,
// and how we identify ourselves to it.
//
// Layers, later ones win:
// 1. Built-in defaults (the portfolio owner's account on api.github.com)
// 2. A TOML file: --config <path>, or $XDG_CONFIG_HOME/repo-showcase/config.toml
// 3. REPO_SHOWCASE_* environment variables (e.g. REPO_SHOWCASE_ACCOUNT)
// 4. Command-line overrides (--account)
//
// A broken config never stops the page from rendering: we warn and fall back
// to the defaults, same as a missing file.
// =============================================================================

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ACCOUNT: &str = "JuanCervantesAla";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// GitHub login whose public repositories make up the feed
    pub account: String,
    /// Base URL of the GitHub REST API
    pub api_base: String,
    /// GitHub rejects requests without a User-Agent header
    pub user_agent: String,
    /// Request timeout; unset means the HTTP client's default (none)
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account: DEFAULT_ACCOUNT.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: format!("repo-showcase/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: None,
        }
    }
}

impl Config {
    pub fn load(config_path: Option<PathBuf>, account: Option<String>) -> Self {
        let config_file = config_path.unwrap_or_else(default_config_file);

        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if config_file.exists() {
            figment = figment.merge(Toml::file(&config_file));
        }

        figment = figment.merge(Env::prefixed("REPO_SHOWCASE_"));

        if let Some(account) = account {
            figment = figment.merge(Serialized::default("account", account));
        }

        match figment.extract() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    file = %config_file.display(),
                    "config parse error, using defaults: {e}"
                );
                Config::default()
            }
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_config_file() -> PathBuf {
    config_dir().join("repo-showcase").join("config.toml")
}

fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| Path::new(&h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}
