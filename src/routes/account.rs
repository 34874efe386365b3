//! Account profile and statistics endpoints.
//!
//! - GET /api/v1/account
//!   Profile of the configured account.
//!
//! - GET /api/v1/stats
//!   Repository count, star and fork totals, per-language repository
//!   counts and the five most recently updated repositories. Only
//!   repositories allowed by the visibility policy are counted.

use axum::{Json, Router, extract::State, routing::get};
use indexmap::IndexMap;

use crate::error::Result;
use crate::feed::filter_repositories;
use crate::models::{AccountInfo, RepositoryRef, StatsResponse};
use crate::state::SharedState;

const RECENT_REPOS: usize = 5;

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/account", get(get_account))
        .route("/api/v1/stats", get(get_stats))
        .with_state(state)
}

async fn get_account(State(state): State<SharedState>) -> Result<Json<AccountInfo>> {
    let account = state.upstream.get_account(&state.settings.owner).await?;
    Ok(Json(account))
}

async fn get_stats(State(state): State<SharedState>) -> Result<Json<StatsResponse>> {
    let owner = &state.settings.owner;
    let include_private = state.include_private(None);

    let (account, repos) = tokio::try_join!(
        state.upstream.get_account(owner),
        state.upstream.list_repositories(owner, include_private),
    )?;
    let repos = filter_repositories(repos, include_private);

    Ok(Json(summarize(account, repos)))
}

fn summarize(account: AccountInfo, repos: Vec<RepositoryRef>) -> StatsResponse {
    let mut language_stats: IndexMap<String, usize> = IndexMap::new();
    for language in repos.iter().filter_map(|r| r.language.as_ref()) {
        *language_stats.entry(language.clone()).or_default() += 1;
    }

    StatsResponse {
        account,
        repo_count: repos.len(),
        total_stars: repos.iter().map(|r| r.stars).sum(),
        total_forks: repos.iter().map(|r| r.forks).sum(),
        language_stats,
        recent_repos: repos.into_iter().take(RECENT_REPOS).collect(),
    }
}
