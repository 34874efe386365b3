//! Upstream source-hosting API access.
//!
//! - `client`: `GitHubClient`, the reqwest-backed implementation
//! - `types`: wire records as returned by the REST API
//!
//! Callers depend on the `UpstreamApi` trait so the feed pipeline can run
//! against any data source, including in-memory fakes in tests.

pub mod client;
pub mod types;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{AccountInfo, RepositoryRef};

pub use client::GitHubClient;
pub use types::RawCommit;

/// Largest page the upstream API will serve for list endpoints.
pub const MAX_PER_PAGE: usize = 100;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Deserialization error: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl UpstreamError {
    /// HTTP status reported by the upstream, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::Status { status, .. } => Some(*status),
            UpstreamError::Transport(e) => e.status().map(|s| s.as_u16()),
            UpstreamError::Timeout | UpstreamError::Decode(_) | UpstreamError::InvalidUrl(_) => None,
        }
    }
}

/// Read operations the feed needs from the upstream API.
#[async_trait]
pub trait UpstreamApi: Send + Sync {
    async fn get_account(&self, owner: &str) -> Result<AccountInfo, UpstreamError>;

    /// Every repository owned by `owner`, across all listing pages. Private
    /// repositories are only visible when a credential is configured and
    /// `include_private` is set.
    async fn list_repositories(
        &self,
        owner: &str,
        include_private: bool,
    ) -> Result<Vec<RepositoryRef>, UpstreamError>;

    async fn list_commits(
        &self,
        owner: &str,
        repo: &str,
        per_page: usize,
        page: usize,
    ) -> Result<Vec<RawCommit>, UpstreamError>;
}
