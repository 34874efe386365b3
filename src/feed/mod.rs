//! Commit feed pipeline.
//!
//! repository list → `filter` → `aggregate` (parallel fetch + merge) →
//! `paginate` → `group`
//!
//! Every step is request-scoped: a fresh aggregation runs on every call and
//! nothing is cached between requests.

pub mod aggregate;
pub mod filter;
pub mod group;
pub mod paginate;

pub use aggregate::{AggregatedFeed, aggregate, fetch_limit_for};
pub use filter::filter_repositories;
pub use group::{GroupedByDate, group_by_date};
pub use paginate::{PageRequest, paginate};

use crate::error::Result;
use crate::models::{ChangelogResponse, LatestResponse};
use crate::state::AppState;

/// Upper bound for the latest-commits endpoint.
pub const MAX_LATEST: i64 = 50;

/// List, filter and aggregate repositories for a request reaching `depth`
/// items into the feed. Failing to list repositories fails the whole
/// request.
pub async fn load_feed(state: &AppState, include_private: bool, depth: usize) -> Result<AggregatedFeed> {
    let settings = &state.settings;
    let repos = state
        .upstream
        .list_repositories(&settings.owner, include_private)
        .await?;
    let repos = filter_repositories(repos, include_private);

    let fetch_limit = fetch_limit_for(depth, settings.per_repo_limit);
    Ok(aggregate(
        state.upstream.as_ref(),
        &settings.owner,
        &repos,
        fetch_limit,
        settings.fetch_timeout,
    )
    .await)
}

pub async fn build_changelog(
    state: &AppState,
    request: PageRequest,
    include_private: bool,
) -> Result<ChangelogResponse> {
    let feed = load_feed(state, include_private, request.depth()).await?;
    let page = paginate(&feed.commits, request);

    Ok(ChangelogResponse {
        total_count: page.total_count,
        page_number: page.page_number,
        page_size: page.page_size,
        has_more: page.has_more,
        truncated: feed.truncated,
        grouped_by_date: group_by_date(&page.items),
        items: page.items,
    })
}

/// The newest `limit` commits across all repositories, capped at `MAX_LATEST`.
pub async fn latest_commits(state: &AppState, limit: i64, include_private: bool) -> Result<LatestResponse> {
    let request = PageRequest::new(1, limit.min(MAX_LATEST))?;
    let feed = load_feed(state, include_private, request.depth()).await?;
    let page = paginate(&feed.commits, request);

    Ok(LatestResponse {
        total: page.items.len(),
        limit: page.page_size,
        commits: page.items,
    })
}
