//! Fan-out commit fetch and merge.
//!
//! One `list_commits` call per repository runs concurrently; every call has
//! its own timeout and its own result slot, so a slow or failing repository
//! only removes its own commits from the feed. The merge runs after all
//! slots resolve.

use std::time::Duration;

use futures::future::join_all;

use crate::github::{MAX_PER_PAGE, RawCommit, UpstreamApi, UpstreamError};
use crate::models::{Commit, RepositoryRef};

/// Every commit fetched for one request, newest first.
#[derive(Debug, Clone, Default)]
pub struct AggregatedFeed {
    pub commits: Vec<Commit>,
    /// Repositories whose fetch failed or timed out
    pub failed_repositories: Vec<String>,
    /// At least one repository filled its whole fetch window
    pub truncated: bool,
}

/// Per-repository fetch limit for a request reaching `depth` items into the
/// feed. Never below `minimum`, never above what the upstream serves in one
/// page.
pub fn fetch_limit_for(depth: usize, minimum: usize) -> usize {
    depth.max(minimum).clamp(1, MAX_PER_PAGE)
}

pub async fn aggregate(
    upstream: &dyn UpstreamApi,
    owner: &str,
    repos: &[RepositoryRef],
    fetch_limit: usize,
    timeout: Duration,
) -> AggregatedFeed {
    let fetches = repos.iter().map(move |repo| async move {
        match tokio::time::timeout(timeout, upstream.list_commits(owner, &repo.name, fetch_limit, 1)).await {
            Ok(result) => result,
            Err(_) => Err(UpstreamError::Timeout),
        }
    });
    let slots: Vec<Result<Vec<RawCommit>, UpstreamError>> = join_all(fetches).await;

    let mut feed = AggregatedFeed::default();
    for (repo, slot) in repos.iter().zip(slots) {
        match slot {
            Ok(raw) => {
                if raw.len() >= fetch_limit {
                    feed.truncated = true;
                }
                feed.commits
                    .extend(raw.into_iter().filter_map(|c| Commit::from_raw(c, repo)));
            }
            Err(e) => {
                tracing::warn!("Skipping commits for {}: {}", repo.name, e);
                feed.failed_repositories.push(repo.name.clone());
            }
        }
    }

    // sort_by is stable: ties keep repository order, then upstream order
    feed.commits.sort_by(|a, b| b.author_date.cmp(&a.author_date));

    tracing::debug!(
        "Aggregated {} commits from {} repositories ({} failed, limit {})",
        feed.commits.len(),
        repos.len(),
        feed.failed_repositories.len(),
        fetch_limit
    );
    feed
}
