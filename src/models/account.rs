//! Account and deployment-level DTOs.
//!
//! - `AccountInfo`: Profile of the aggregated account (header display)
//! - `ConfigResponse`: Presentation toggles derived from configuration
//! - `StatsResponse`: Repository totals and language breakdown

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::RepositoryRef;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInfo {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigResponse {
    pub show_private_repos: bool,
    pub show_api_button: bool,
    pub default_lang: String,
    pub notifications_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub account: AccountInfo,
    pub repo_count: usize,
    pub total_stars: u64,
    pub total_forks: u64,
    /// Language -> repository count, in order of first appearance
    pub language_stats: IndexMap<String, usize>,
    pub recent_repos: Vec<RepositoryRef>,
}
