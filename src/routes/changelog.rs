//! Aggregated feed endpoints.
//!
//! - GET /api/v1/changelog?limit=20&page=1[&include_private=false]
//!   One page of the merged, newest-first feed of every repository, plus
//!   the same page grouped by UTC calendar day. `include_private` can only
//!   narrow the configured visibility policy.
//!
//! - GET /api/v1/changelog/latest?limit=15
//!   Newest commits across all repositories, at most 50.
//!
//! Page parameters are validated before any upstream call is made.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;

use crate::error::Result;
use crate::feed::{self, PageRequest};
use crate::models::{ChangelogResponse, LatestResponse};
use crate::state::SharedState;

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/changelog", get(get_changelog))
        .route("/api/v1/changelog/latest", get(get_latest))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct ChangelogQuery {
    #[serde(default = "default_limit")]
    limit: i64,
    #[serde(default = "default_page")]
    page: i64,
    include_private: Option<bool>,
}

fn default_limit() -> i64 {
    20
}

fn default_page() -> i64 {
    1
}

async fn get_changelog(
    State(state): State<SharedState>,
    Query(query): Query<ChangelogQuery>,
) -> Result<Json<ChangelogResponse>> {
    let request = PageRequest::new(query.page, query.limit)?;
    let include_private = state.include_private(query.include_private);
    let response = feed::build_changelog(&state, request, include_private).await?;
    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct LatestQuery {
    #[serde(default = "default_latest_limit")]
    limit: i64,
}

fn default_latest_limit() -> i64 {
    15
}

async fn get_latest(
    State(state): State<SharedState>,
    Query(query): Query<LatestQuery>,
) -> Result<Json<LatestResponse>> {
    let include_private = state.include_private(None);
    let response = feed::latest_commits(&state, query.limit, include_private).await?;
    Ok(Json(response))
}
