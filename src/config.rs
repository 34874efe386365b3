//! Command-line and environment configuration.
//!
//! Every flag falls back to an environment variable, and a `.env` file in
//! the working directory is loaded before parsing.

use std::time::Duration;

use clap::Parser;

use crate::state::Settings;

/// Commit changelog - one date-grouped feed of every repository you own
#[derive(Parser, Debug)]
#[command(name = "changelog-feed")]
#[command(about = "Aggregated, paginated commit feed across an account's repositories", long_about = None)]
pub struct Cli {
    /// Account whose repositories are aggregated
    #[arg(long, env = "GITHUB_USERNAME")]
    pub owner: String,

    /// API token; without one only public data is visible
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Base URL of the upstream REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub api_url: String,

    /// Include private repositories in the feed
    #[arg(long, env = "SHOW_PRIVATE_REPOS", default_value_t = false)]
    pub show_private: bool,

    /// Tell the presentation layer to show the API button
    #[arg(long, env = "SHOW_API_BUTTON", default_value_t = false)]
    pub show_api_button: bool,

    /// Default presentation language
    #[arg(long, env = "DEFAULT_LANG", default_value = "TR")]
    pub default_lang: String,

    /// Discord-compatible webhook receiving commit notifications
    #[arg(long, env = "DISCORD_WEBHOOK_URL", hide_env_values = true)]
    pub webhook_url: Option<String>,

    /// Enable commit notifications
    #[arg(long, env = "DISCORD_NOTIFICATIONS", default_value_t = false)]
    pub notifications: bool,

    /// Minimum commits fetched per repository
    #[arg(long, env = "PER_REPO_LIMIT", default_value_t = 20)]
    pub per_repo_limit: usize,

    /// Timeout for each upstream call, in seconds
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 3001)]
    pub port: u16,
}

impl Cli {
    /// Parse arguments after loading `.env`.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn settings(&self) -> Settings {
        Settings {
            owner: self.owner.clone(),
            show_private: self.show_private,
            show_api_button: self.show_api_button,
            default_lang: self.default_lang.clone(),
            per_repo_limit: self.per_repo_limit,
            fetch_timeout: self.timeout(),
        }
    }
}
