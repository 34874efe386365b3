//! Repository endpoints.
//!
//! - GET /api/v1/repos
//!   Repositories of the configured account, after the visibility policy.
//!
//! - GET /api/v1/repos/{repo}/commits?per_page=30&page=1
//!   Upstream commits for one visible repository, reduced to the fields the
//!   feed models. Repositories hidden by the visibility policy answer 404.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::feed::{PageRequest, filter_repositories};
use crate::github::RawCommit;
use crate::models::RepositoryRef;
use crate::state::SharedState;

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/repos", get(list_repos))
        .route("/api/v1/repos/{repo}/commits", get(list_repo_commits))
        .with_state(state)
}

async fn visible_repos(state: &SharedState) -> Result<Vec<RepositoryRef>> {
    let include_private = state.include_private(None);
    let repos = state
        .upstream
        .list_repositories(&state.settings.owner, include_private)
        .await?;
    Ok(filter_repositories(repos, include_private))
}

async fn list_repos(State(state): State<SharedState>) -> Result<Json<Vec<RepositoryRef>>> {
    Ok(Json(visible_repos(&state).await?))
}

/// Repository names are limited to the characters the upstream accepts.
fn validate_repo_name(name: &str) -> Result<()> {
    let allowed = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if name.is_empty() || !allowed || name == "." || name == ".." {
        return Err(AppError::InvalidRepositoryName(name.to_string()));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct CommitsQuery {
    #[serde(default = "default_per_page")]
    per_page: i64,
    #[serde(default = "default_page")]
    page: i64,
}

fn default_per_page() -> i64 {
    30
}

fn default_page() -> i64 {
    1
}

async fn list_repo_commits(
    State(state): State<SharedState>,
    Path(repo): Path<String>,
    Query(query): Query<CommitsQuery>,
) -> Result<Json<Vec<RawCommit>>> {
    validate_repo_name(&repo)?;
    let request = PageRequest::new(query.page, query.per_page)?;

    if !visible_repos(&state).await?.iter().any(|r| r.name == repo) {
        return Err(AppError::NotFound(format!("Repository '{}'", repo)));
    }

    let commits = state
        .upstream
        .list_commits(
            &state.settings.owner,
            &repo,
            request.page_size(),
            request.page_number(),
        )
        .await?;
    Ok(Json(commits))
}
