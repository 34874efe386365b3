//! reqwest-backed client for the GitHub REST API (v3).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use super::types::{RawCommit, RepoRecord};
use super::{MAX_PER_PAGE, UpstreamApi, UpstreamError};
use crate::models::{AccountInfo, RepositoryRef};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const ACCEPT_V3: &str = "application/vnd.github.v3+json";

pub struct GitHubClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(
        base_url: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| UpstreamError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self {
            http,
            base_url,
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Base URL extended by `segments`, each percent-encoded as a single
    /// path segment so names cannot add segments or a query string.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn get(&self, segments: &[&str]) -> RequestBuilder {
        let request = self
            .http
            .get(self.endpoint(segments))
            .header(ACCEPT, ACCEPT_V3);

        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, UpstreamError> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                UpstreamError::Timeout
            } else {
                UpstreamError::Transport(e)
            }
        })?;
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| UpstreamError::Decode(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(UpstreamError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl UpstreamApi for GitHubClient {
    async fn get_account(&self, owner: &str) -> Result<AccountInfo, UpstreamError> {
        self.send(self.get(&["users", owner])).await
    }

    async fn list_repositories(
        &self,
        owner: &str,
        include_private: bool,
    ) -> Result<Vec<RepositoryRef>, UpstreamError> {
        // The authenticated listing is the only one that returns private repositories
        let authenticated = include_private && self.has_token();
        let mut repos = Vec::new();

        // A short page marks the end of the listing
        for page in 1.. {
            let request = if authenticated {
                self.get(&["user", "repos"]).query(&[("affiliation", "owner")])
            } else {
                self.get(&["users", owner, "repos"])
            };

            let records: Vec<RepoRecord> = self
                .send(
                    request
                        .query(&[("sort", "updated"), ("direction", "desc")])
                        .query(&[("per_page", MAX_PER_PAGE), ("page", page)]),
                )
                .await?;

            let done = records.len() < MAX_PER_PAGE;
            repos.extend(records.into_iter().map(RepositoryRef::from));
            if done {
                break;
            }
        }

        tracing::debug!("Listed {} repositories for {}", repos.len(), owner);
        Ok(repos)
    }

    async fn list_commits(
        &self,
        owner: &str,
        repo: &str,
        per_page: usize,
        page: usize,
    ) -> Result<Vec<RawCommit>, UpstreamError> {
        let per_page = per_page.clamp(1, MAX_PER_PAGE);
        let request = self
            .get(&["repos", owner, repo, "commits"])
            .query(&[("per_page", per_page), ("page", page.max(1))]);

        self.send(request).await
    }
}
