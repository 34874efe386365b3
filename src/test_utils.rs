//! Fixtures and an in-memory upstream for unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::github::types::{AccountRef, CommitBody, Signature};
use crate::github::{RawCommit, UpstreamApi, UpstreamError};
use crate::models::{AccountInfo, Commit, RepositoryRef};
use crate::notify::Notifier;
use crate::state::{AppState, Settings, SharedState};

pub fn repo_ref(name: &str, private: bool) -> RepositoryRef {
    RepositoryRef {
        name: name.to_string(),
        full_name: format!("octo/{}", name),
        url: format!("https://github.com/octo/{}", name),
        language: Some("Rust".to_string()),
        description: None,
        is_private: private,
        stars: 1,
        forks: 0,
    }
}

pub fn parse_date(date: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(date)
        .expect("fixture dates are RFC 3339")
        .with_timezone(&Utc)
}

pub fn raw_commit(sha: &str, date: &str) -> RawCommit {
    RawCommit {
        sha: sha.to_string(),
        commit: CommitBody {
            message: format!("Change {}", sha),
            author: Some(Signature {
                name: "Ada".to_string(),
                date: parse_date(date),
            }),
        },
        author: Some(AccountRef {
            avatar_url: Some("https://avatars.example/ada".to_string()),
        }),
        html_url: format!("https://github.com/octo/alpha/commit/{}", sha),
    }
}

pub fn commit_at(repo: &RepositoryRef, sha: &str, date: &str) -> Commit {
    Commit::from_raw(raw_commit(sha, date), repo).expect("fixture commits are dated")
}

/// Scripted upstream: serves fixed repositories and commits, with optional
/// failing or never-answering repositories.
#[derive(Default)]
pub struct FakeUpstream {
    repos: Vec<RepositoryRef>,
    listing_error: Option<u16>,
    commits: HashMap<String, Vec<RawCommit>>,
    failing: HashMap<String, u16>,
    stalled: HashSet<String>,
    calls: AtomicUsize,
    max_per_page: AtomicUsize,
}

impl FakeUpstream {
    pub fn with_repo(mut self, repo: RepositoryRef) -> Self {
        self.repos.push(repo);
        self
    }

    pub fn with_commits(mut self, repo: &str, commits: Vec<RawCommit>) -> Self {
        self.commits.insert(repo.to_string(), commits);
        self
    }

    /// Commit fetches for `repo` answer 409, as for an empty repository.
    pub fn failing(self, repo: &str) -> Self {
        self.failing_with(repo, 409)
    }

    pub fn failing_with(mut self, repo: &str, status: u16) -> Self {
        self.failing.insert(repo.to_string(), status);
        self
    }

    pub fn stalled(mut self, repo: &str) -> Self {
        self.stalled.insert(repo.to_string());
        self
    }

    pub fn failing_listing(mut self, status: u16) -> Self {
        self.listing_error = Some(status);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_per_page_requested(&self) -> usize {
        self.max_per_page.load(Ordering::SeqCst)
    }

    fn listing_result(&self) -> Result<(), UpstreamError> {
        match self.listing_error {
            Some(status) => Err(UpstreamError::Status {
                status,
                message: "listing unavailable".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UpstreamApi for FakeUpstream {
    async fn get_account(&self, owner: &str) -> Result<AccountInfo, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.listing_result()?;
        Ok(AccountInfo {
            login: owner.to_string(),
            name: Some("Octo Cat".to_string()),
            avatar_url: None,
            html_url: Some(format!("https://github.com/{}", owner)),
            bio: None,
            public_repos: self.repos.iter().filter(|r| !r.is_private).count() as u64,
            followers: 0,
            following: 0,
        })
    }

    async fn list_repositories(
        &self,
        _owner: &str,
        _include_private: bool,
    ) -> Result<Vec<RepositoryRef>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.listing_result()?;
        Ok(self.repos.clone())
    }

    async fn list_commits(
        &self,
        _owner: &str,
        repo: &str,
        per_page: usize,
        page: usize,
    ) -> Result<Vec<RawCommit>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.max_per_page.fetch_max(per_page, Ordering::SeqCst);

        if self.stalled.contains(repo) {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
        if let Some(&status) = self.failing.get(repo) {
            let message = match status {
                409 => "Git Repository is empty.",
                404 => "Not Found",
                _ => "upstream failure",
            };
            return Err(UpstreamError::Status {
                status,
                message: message.to_string(),
            });
        }

        let commits = self.commits.get(repo).cloned().unwrap_or_default();
        Ok(commits
            .into_iter()
            .skip(page.saturating_sub(1) * per_page)
            .take(per_page)
            .collect())
    }
}

pub fn test_settings(show_private: bool) -> Settings {
    Settings {
        owner: "octo".to_string(),
        show_private,
        show_api_button: false,
        default_lang: "EN".to_string(),
        per_repo_limit: 20,
        fetch_timeout: Duration::from_secs(5),
    }
}

pub fn test_state_with_notifier(
    upstream: FakeUpstream,
    show_private: bool,
    notifier: Notifier,
) -> (SharedState, Arc<FakeUpstream>) {
    let upstream = Arc::new(upstream);
    let state = Arc::new(AppState {
        upstream: upstream.clone(),
        notifier,
        settings: test_settings(show_private),
    });
    (state, upstream)
}

pub fn test_state(upstream: FakeUpstream, show_private: bool) -> (SharedState, Arc<FakeUpstream>) {
    let notifier = Notifier::new(None, false, Duration::from_secs(5)).expect("notifier builds");
    test_state_with_notifier(upstream, show_private, notifier)
}
